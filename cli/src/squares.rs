use falling_squares::{tallest_stacks, Square};

pub fn run(squares: &[Square], json: bool) -> anyhow::Result<()> {
    let stacks = tallest_stacks(squares)?;
    if json {
        println!("{}", serde_json::to_string(&stacks)?);
    } else {
        for (square, tallest) in squares.iter().zip(&stacks) {
            println!(
                "square at {} with side {}: tallest stack {}",
                square.left, square.side, tallest
            );
        }
    }
    Ok(())
}
