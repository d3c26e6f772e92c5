use em_core::Mixer;

pub fn run(mixer: &Mixer) -> Result<(), String> {
    print!("{}", render(mixer));
    Ok(())
}

/// Numbered listing, one emoji per line.
pub fn render(mixer: &Mixer) -> String {
    mixer
        .catalog()
        .iter()
        .enumerate()
        .map(|(i, token)| format!("  {:>2}  {token}\n", i + 1))
        .collect()
}
