// src/bin/cli.rs
fn main() -> color_eyre::Result<()> {
    phg_catalog::cli::run()
}
