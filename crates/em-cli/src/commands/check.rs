use em_core::Mixer;

pub fn run(mixer: &Mixer) -> Result<(), String> {
    let resolver = mixer.resolver();

    println!("  All checks passed.");
    println!(
        "  {} emojis, {} recipes, {} surprises, {} ms mix delay",
        mixer.catalog().len(),
        resolver.recipes().len(),
        resolver.surprises().len(),
        mixer.mix_delay().as_millis()
    );

    Ok(())
}
