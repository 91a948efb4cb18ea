mod bst;
mod linked_list;
