use std::io::Cursor;

use rb_forest::shell::{self, CHOICE_PROMPT, MENU};
use rb_forest::{OrderedTree, RbTree, SearchTree};

fn session<T: SearchTree<Key = i64>>(tree: &mut T, script: &str) -> String {
    let mut out = Vec::new();
    shell::run(tree, Cursor::new(script.as_bytes()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn both(script: &str) -> [String; 2] {
    [
        session(&mut OrderedTree::<i64>::new(), script),
        session(&mut RbTree::<i64>::new(), script),
    ]
}

#[test]
fn shell_prints_menu_and_quits_matrix() {
    for out in both("0\n") {
        assert!(out.starts_with(MENU));
        assert_eq!(out.matches(CHOICE_PROMPT).count(), 1);
    }
}

#[test]
fn shell_insert_and_walk_matrix() {
    for out in both("1 10\n1 5\n1 20\n1 3\n1 7\n2\n0\n") {
        assert!(out.contains("The resulting in-order treewalk of the tree is: \n3 5 7 10 20\n"));
    }
}

#[test]
fn shell_walk_of_empty_tree_matrix() {
    for out in both("2\n0\n") {
        assert!(out.contains("The tree is empty.\n"));
    }
}

#[test]
fn shell_search_matrix() {
    for out in both("1\n4\n3\n4\n3\n9\n0\n") {
        let found = out.find("Integer found!").unwrap();
        let missing = out.find("Integer not in tree!").unwrap();
        assert!(found < missing);
    }
}

#[test]
fn shell_remove_matrix() {
    for out in both("1 8\n4 8\n4 8\n2\n0\n") {
        assert!(out.contains("Input an integer that you want to remove: "));
        assert!(out.contains("Integer successfully removed!\n"));
        assert!(out.contains("Error. Integer not in tree!\n"));
        assert!(out.contains("The tree is empty.\n"));
    }
}

#[test]
fn shell_unknown_choice_matrix() {
    for out in both("9\nfoo\n0\n") {
        assert_eq!(out.matches("Choice unknown;").count(), 2);
        assert_eq!(out.matches(CHOICE_PROMPT).count(), 3);
    }
}

#[test]
fn shell_rejects_non_integer_key_matrix() {
    for out in both("1 abc\n2\n0\n") {
        assert!(out.contains("Not an integer: abc\n"));
        assert!(out.contains("The tree is empty.\n"));
    }
}

#[test]
fn shell_end_of_input_quits_matrix() {
    for out in both("1 1\n") {
        assert!(out.ends_with(&format!("{CHOICE_PROMPT}\n")));
    }
    for out in both("1") {
        assert!(out.ends_with("Input an integer that you want to insert into the tree: "));
    }
}

#[test]
fn shell_structure_matrix() {
    let out = session(&mut RbTree::<i64>::new(), "1 2\n1 1\n1 3\n5\n0\n");
    assert!(out.contains("The tree structure is:\n└─ 2 black\n  ← 1 red\n  → 3 red\n"));

    let out = session(&mut OrderedTree::<i64>::new(), "5\n0\n");
    assert!(out.contains("The tree structure is:\n∅\n"));
}

#[test]
fn shell_releases_tree_on_exit_matrix() {
    let mut tree = RbTree::<i64>::new();
    session(&mut tree, "1 1\n1 2\n1 3\n0\n");
    assert!(tree.is_empty());

    let mut tree = OrderedTree::<i64>::new();
    session(&mut tree, "1 1\n1 2\n");
    assert!(tree.is_empty());
}
