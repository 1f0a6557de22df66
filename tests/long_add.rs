use anyhow::Result;
use curried::{args, curry, BindError, Value};
use serde_json::json;

#[curry(min_args = 5)]
fn add(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
    a + b + c + d + e
}

#[curry(min_args = 5)]
fn mutable_add(a: i32, b: i32, mut c: i32, d: i32, e: i32) -> i32 {
    c *= 2;
    a + b + c + d + e
}

fn one_by_one(factory: curried::Curry<Value, Result<i32, BindError>>, values: [i32; 5]) -> Result<i32> {
    let (last, leading) = values.split_last().expect("five values");
    let mut curried = factory.start();
    for value in leading {
        curried = curried
            .arg(json!(value))?
            .into_partial()
            .expect("fewer than five arguments");
    }
    let result = curried
        .arg(json!(last))?
        .into_complete()
        .expect("five arguments invoke the function");
    Ok(result?)
}

#[test]
fn long_add() -> Result<()> {
    assert_eq!(one_by_one(add_curried(), [1, 1, 1, 1, 2])?, 6);
    assert_eq!(one_by_one(mutable_add_curried(), [1, 1, 1, 1, 3])?, 8);
    Ok(())
}

#[test]
fn original_function_is_kept() {
    assert_eq!(add(1, 2, 3, 4, 5), 15);
}

#[test]
fn mixed_positional_and_keyword() -> Result<()> {
    let curried = add_curried()
        .call(args![json!(1), json!(2), e = json!(5)])?
        .into_partial()
        .expect("three arguments");
    let result = curried
        .call(args![d = json!(4), c = json!(3)])?
        .into_complete()
        .expect("five arguments");
    assert_eq!(result?, 15);
    Ok(())
}
