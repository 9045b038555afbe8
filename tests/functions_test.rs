//! Functions, closures and higher-order functions.

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn apply_twice<F: Fn(i32) -> i32>(f: F, value: i32) -> i32 {
    f(f(value))
}

#[test]
fn test_plain_function() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(add(-1, 1), 0);
}

#[test]
fn test_function_pointers() {
    let op: fn(i32, i32) -> i32 = add;
    assert_eq!(op(10, 20), 30);
}

#[test]
fn test_closures_capture_environment() {
    let offset = 100;
    let with_offset = |n: i32| n + offset;
    assert_eq!(with_offset(5), 105);
}

#[test]
fn test_closures_capture_by_mutation() {
    let mut counter = 0;
    let mut bump = || {
        counter += 1;
        counter
    };
    assert_eq!(bump(), 1);
    assert_eq!(bump(), 2);
}

#[test]
fn test_move_closures_take_ownership() {
    let name = String::from("closure");
    let greet = move || format!("hello, {}", name);
    assert_eq!(greet(), "hello, closure");
    // `name` is no longer usable here; the closure owns it.
}

#[test]
fn test_higher_order_functions() {
    assert_eq!(apply_twice(|n| n * 2, 5), 20);
    assert_eq!(apply_twice(|n| n + 1, 0), 2);
}

#[test]
fn test_returning_closures() {
    fn multiplier(factor: i32) -> impl Fn(i32) -> i32 {
        move |n| n * factor
    }

    let triple = multiplier(3);
    assert_eq!(triple(7), 21);
}

#[test]
fn test_boxed_closures_in_a_vec() {
    let ops: Vec<Box<dyn Fn(i32) -> i32>> = vec![
        Box::new(|n| n + 1),
        Box::new(|n| n * 2),
        Box::new(|n| n - 3),
    ];

    let result = ops.iter().fold(10, |acc, op| op(acc));
    assert_eq!(result, 19); // ((10 + 1) * 2) - 3
}
