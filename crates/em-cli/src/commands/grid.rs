use comfy_table::{ContentArrangement, Table};

use em_core::{Mixer, ResolutionSource};

pub fn run(mixer: &Mixer) -> Result<(), String> {
    let catalog = mixer.catalog();
    let resolver = mixer.resolver();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![String::from("+")];
    header.extend(catalog.iter().map(ToString::to_string));
    table.set_header(header);

    let mut curated = 0usize;
    for a in catalog.iter() {
        let mut row = vec![a.to_string()];
        for b in catalog.iter() {
            let resolution = resolver.resolve_detailed(a, b);
            if resolution.source == ResolutionSource::Recipe {
                curated += 1;
                row.push(format!("{}*", resolution.result));
            } else {
                row.push(resolution.result.to_string());
            }
        }
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  * curated ({curated} of {} cells)", catalog.len() * catalog.len());

    Ok(())
}
