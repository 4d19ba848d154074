pub fn run() -> anyhow::Result<()> {
    println!("logsift {}", env!("CARGO_PKG_VERSION"));
    println!("Chunked log triage through a chat-completion model");
    Ok(())
}
