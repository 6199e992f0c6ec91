//! Terminal Zero console entry point.
//!
//! A read-eval-print loop over the command engine: print the level
//! briefing, read a line, dispatch it, and advance (or jump) levels when
//! the result says so. Type `exit` or `quit` to leave.

mod config;

use std::io::{BufRead, Write};

use anyhow::Result;

use config::GameConfig;
use tzero_engine::Interpreter;
use tzero_types::MAX_LEVEL;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load()?;
    tzero_levels::validate_catalog()?;
    log::info!("starting Terminal Zero at level {}", config.start_level);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run(
        &config,
        &mut stdin.lock(),
        &mut stdout,
    )
}

fn run(config: &GameConfig, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    let mut interpreter = Interpreter::new();
    let mut level = config.start_level;

    writeln!(output, "Terminal Zero")?;
    writeln!(output, "Type 'help' for commands, 'exit' to quit.\n")?;
    print_briefing(output, level)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let raw = line.trim_end_matches(['\n', '\r']);
        if matches!(raw.trim(), "exit" | "quit") {
            break;
        }

        let level_data = tzero_levels::level_data(level);
        let result = interpreter.process(raw, level, &level_data);
        if !result.output.is_empty() {
            writeln!(output, "{}", result.output)?;
        }

        if result.level_completed {
            let next = match result.skip_to_level {
                Some(target) => target,
                None => level + 1,
            };
            if next > MAX_LEVEL {
                writeln!(output, "\nYou've completed all {MAX_LEVEL} levels. Well played.")?;
                break;
            }
            level = next;
            writeln!(output)?;
            print_briefing(output, level)?;
        }
    }

    log::info!("session ended at level {level}");
    Ok(())
}

fn print_briefing(output: &mut impl Write, level: u32) -> Result<()> {
    let data = tzero_levels::level_data(level);
    writeln!(output, "=== Level {}: {} [{}] ===", data.id, data.title, data.track)?;
    writeln!(output, "{}", data.description)?;
    for objective in &data.objectives {
        writeln!(output, "  * {objective}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn scripted_session_advances_to_level_two() {
        let config = GameConfig::default();
        let mut input = Cursor::new("cat secret.txt\nexit\n");
        let mut output = Vec::new();
        run(&config, &mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("f1rst_st3ps"));
        assert!(text.contains("Level 2:"));
    }

    #[test]
    fn eof_ends_the_session() {
        let config = GameConfig::default();
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        run(&config, &mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Level 1:"));
    }

    #[test]
    fn skip_command_jumps_levels() {
        let config = GameConfig::default();
        let mut input = Cursor::new("mod_skip 30\nquit\n");
        let mut output = Vec::new();
        run(&config, &mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Level 30:"));
    }
}

