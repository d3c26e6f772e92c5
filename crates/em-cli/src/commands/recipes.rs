use comfy_table::{ContentArrangement, Table};

use em_core::Mixer;

pub fn run(mixer: &Mixer) -> Result<(), String> {
    let recipes = mixer.resolver().recipes();

    if recipes.is_empty() {
        println!("  No curated recipes; every pair is a surprise.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Left", "Right", "Result"]);

    for recipe in recipes.iter() {
        table.add_row(vec![
            recipe.left.as_str(),
            recipe.right.as_str(),
            recipe.result.as_str(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} recipes", recipes.len());

    Ok(())
}
