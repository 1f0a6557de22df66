use curried::{args, curry, Arguments, Curry, CurryError};
use serde_json::json;

#[curry(min_args = 2)]
fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let sum = add_curried()
        .call(args![json!(1)])?
        .into_partial()
        .ok_or("add should wait for a second argument")?
        .call(args![b = json!(2)])?
        .into_complete()
        .ok_or("add should run once both arguments are present")??;
    assert_eq!(sum, 3);
    println!("{} = {}", add(1, 2), sum);

    let join = Curry::new(|arguments: Arguments<String>| {
        let separator = arguments.get("sep").map_or(" ", String::as_str);
        arguments.args().join(separator)
    });
    let greeting = join
        .call(args!["hello".to_owned(), sep = ", ".to_owned()])?
        .into_partial()
        .ok_or("no threshold, so join keeps accumulating")?;
    println!("{greeting}");
    match greeting.call(args!["world".to_owned()])? {
        curried::Applied::Partial(curried) => println!("{}", curried.invoke()),
        curried::Applied::Complete(joined) => println!("{joined}"),
    }

    if let Err(CurryError::KeyCollision { keys }) = greeting.call(args![sep = "-".to_owned()]) {
        println!("rejected duplicate keyword(s): {keys:?}");
    }

    Ok(())
}
