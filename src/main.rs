use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use csvtool::cli::CliArgs;
use csvtool::input::{parse_line, Input, HELP};
use csvtool::messages::AppMsg;
use csvtool::notification::ConsoleSink;
use csvtool::{AppModel, Runtime, ToolConfig};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    csvtool::tracing::init();

    let mut config = ToolConfig::load();
    args.apply_to(&mut config);

    let mut runtime = Runtime::new(AppModel::new(config), Arc::new(ConsoleSink));

    if let Some(path) = args.file.clone() {
        runtime.dispatch(AppMsg::OpenFile(path).into());
        if runtime.wait_idle() {
            show(&runtime);
        }
    }

    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;

        let redraw = match parse_line(&line) {
            Ok(Input::Dispatch(msg)) => {
                let redraw = runtime.dispatch(msg);
                runtime.wait_idle() || redraw
            }
            Ok(Input::Show) => true,
            Ok(Input::Help) => {
                println!("{}", HELP);
                false
            }
            Ok(Input::Nothing) => false,
            Err(e) => {
                eprintln!("{}", e);
                false
            }
        };

        if runtime.model().should_quit {
            break;
        }
        if redraw {
            show(&runtime);
        }
    }

    Ok(())
}

fn show(runtime: &Runtime) {
    let model = runtime.model();
    println!("{}", model.summary());
    if model.has_table() {
        print!("{}", model.render());
    }
}
