use anyhow::Context;
use clap::Parser;
use notebook_kernel_patch::{run, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let notebook_path = args.notebook_path.clone();

    run(args).with_context(|| format!("setting kernel metadata of {}", notebook_path.display()))
}
