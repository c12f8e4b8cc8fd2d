//! Builds a small example list, sorts it, and prints both versions.

use linked_list_sort::LinkedList;

fn main() {
    let mut list: LinkedList<i32> = [4, 2, 1, 3, 5].into_iter().collect();
    println!("Original list: {list}");

    list.sort();
    println!("Sorted list:   {list}");
}
