use em_core::Mixer;

pub fn run(mixer: &Mixer, left: &str, right: &str) -> Result<(), String> {
    let left = super::pick(mixer, left)?;
    let right = super::pick(mixer, right)?;

    let resolution = mixer.resolver().resolve_detailed(left, right);
    println!(
        "  {left} + {right} → {}  ({})",
        resolution.result,
        resolution.source.label()
    );

    Ok(())
}
