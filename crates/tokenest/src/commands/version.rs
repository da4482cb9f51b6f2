pub fn run() -> anyhow::Result<()> {
    println!("tokenest {}", env!("CARGO_PKG_VERSION"));
    println!("Heuristic token estimation for LLM context budgeting");
    Ok(())
}
