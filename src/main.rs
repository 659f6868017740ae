use anyhow::{Context, Result};
use serde::Serialize;

use filtered_collection::FilteredCollection;

fn print_json<V: Serialize>(label: &str, value: &V) -> Result<()> {
    let json = serde_json::to_string(value).with_context(|| format!("serializing {label}"))?;
    println!("{label:<28} {json}");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let fruits = FilteredCollection::new(vec![
        "apple".to_string(),
        "pear".to_string(),
        "banana".to_string(),
        "pineapple".to_string(),
        "kiwi".to_string(),
    ]);
    log::info!("Loaded {} fruits", fruits.len());

    // ---- Filter chains ----
    let with_a = fruits.select(|f, _| f.contains('a'));
    let with_a_and_p = with_a.select(|f, _| f.contains('p'));
    let odd_positions = fruits.select(|_, i| i % 2 == 1);

    print_json("all", &fruits.to_vec())?;
    print_json("contains 'a'", &with_a.all().to_vec())?;
    print_json("contains 'a' and 'p'", &with_a_and_p.all().to_vec())?;
    print_json("odd positions", &odd_positions.all().to_vec())?;

    // ---- Element access ----
    print_json("first", &fruits.first())?;
    print_json("last", &fruits.last())?;
    print_json("item(2)", &fruits.item(2))?;
    print_json("first at odd position", &odd_positions.first())?;
    print_json("item(50) or default", &fruits.item_or(50, "none".to_string()))?;

    // ---- Slicing and sorting ----
    print_json("contains 'a', 2..=3", &with_a.range(2, 3).to_vec())?;
    print_json("sorted", &fruits.sort().to_vec())?;
    print_json("sorted by length", &fruits.sort_by_key(|f| f.len()).to_vec())?;

    Ok(())
}
