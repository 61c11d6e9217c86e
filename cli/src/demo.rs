use interval_tree::{SumTree, TreeError};

pub fn run() -> Result<(), TreeError> {
    let values = [2, 1, 1, 2, 3, 4, 5];
    let mut tree = SumTree::build(&values)?;
    println!("values: {:?}", values);
    tree.add(2, 5, 4)?;
    println!("add 4 to [2, 5], sum over [2, 5] = {}", tree.query(2, 5)?);
    tree.assign(2, 5, 4)?;
    println!("assign 4 to [2, 5], sum over [2, 5] = {}", tree.query(2, 5)?);
    println!("values: {:?}", tree.to_vec());
    Ok(())
}
