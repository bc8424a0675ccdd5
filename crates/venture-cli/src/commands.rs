//! Command parsing for the venture dashboard

use anyhow::{Result, anyhow, bail};

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the full analysis pipeline for an idea
    Analyze { idea: String },
    /// Re-run the financial projection for the current analysis
    Financials,
    /// Show the current financial assumptions
    ShowAssumptions,
    /// Set one financial assumption
    SetAssumption { field: String, value: f64 },
    /// Enter conversation mode, optionally sending a first message
    Chat { opening: Option<String> },
    /// Leave conversation mode
    Back,
    /// Show help
    Help,
    /// Exit the dashboard
    Exit,
}

impl Command {
    /// Parse a command from user input
    ///
    /// Anything not starting with `/` is taken as an idea to analyze.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.is_empty() {
            bail!("Empty input");
        }

        if !input.starts_with('/') {
            return Ok(Command::Analyze {
                idea: input.to_string(),
            });
        }

        let parts: Vec<&str> = input[1..].split_whitespace().collect();
        if parts.is_empty() {
            bail!("Empty command");
        }

        let cmd = parts[0].to_lowercase();
        let args = &parts[1..];

        match cmd.as_str() {
            "analyze" | "a" => {
                if args.is_empty() {
                    bail!("Missing idea text for analyze command");
                }
                Ok(Command::Analyze {
                    idea: args.join(" "),
                })
            }
            "financials" | "fin" | "f" => Ok(Command::Financials),
            "assumptions" | "assume" => match args {
                [] => Ok(Command::ShowAssumptions),
                [field, value] => {
                    let value: f64 = value
                        .parse()
                        .map_err(|_| anyhow!("Assumption value must be a number, got '{value}'"))?;
                    Ok(Command::SetAssumption {
                        field: (*field).to_lowercase(),
                        value,
                    })
                }
                _ => bail!("Usage: /assumptions [field value]"),
            },
            "chat" | "c" => {
                let opening = if args.is_empty() {
                    None
                } else {
                    Some(args.join(" "))
                };
                Ok(Command::Chat { opening })
            }
            "back" | "b" => Ok(Command::Back),
            "help" | "h" | "?" => Ok(Command::Help),
            "exit" | "quit" | "q" => Ok(Command::Exit),
            _ => bail!("Unknown command: {cmd}"),
        }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"
Venture Workbench Commands
==========================

Analysis:
  /analyze <idea>        Run the full five-stage analysis
  /financials            Re-run the financial projection with the current assumptions
  /assumptions           Show the financial assumptions
  /assumptions <f> <v>   Set one assumption, e.g. /assumptions monthly_burn_rate 12000

Conversation:
  /chat                  Enter conversation mode (suggestions shown)
  /chat <message>        Enter conversation mode and send a first message
  /back                  Leave conversation mode

Other:
  /help                  Show help
  /exit                  Exit

Aliases:
  /a = /analyze    /fin = /financials    /c = /chat    /q = /exit

Assumption fields:
  initial_revenue, revenue_growth_rate, cogs_percentage, operating_expenses,
  initial_capital, monthly_burn_rate, customer_acquisition_cost, lifetime_value

Any other text is treated as an idea to analyze; in conversation mode it is
sent to the agent.
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cmd = Command::parse("/analyze a mental health tracking app").unwrap();
        assert_eq!(
            cmd,
            Command::Analyze {
                idea: "a mental health tracking app".to_string()
            }
        );

        let cmd = Command::parse("/a solar kiosks").unwrap();
        assert_eq!(
            cmd,
            Command::Analyze {
                idea: "solar kiosks".to_string()
            }
        );
    }

    #[test]
    fn test_parse_bare_text_is_analyze() {
        let cmd = Command::parse("an app that rents idle 3D printers").unwrap();
        assert_eq!(
            cmd,
            Command::Analyze {
                idea: "an app that rents idle 3D printers".to_string()
            }
        );
    }

    #[test]
    fn test_parse_assumptions() {
        assert_eq!(
            Command::parse("/assumptions").unwrap(),
            Command::ShowAssumptions
        );

        let cmd = Command::parse("/assumptions monthly_burn_rate 12000").unwrap();
        assert_eq!(
            cmd,
            Command::SetAssumption {
                field: "monthly_burn_rate".to_string(),
                value: 12000.0
            }
        );
    }

    #[test]
    fn test_parse_assumption_value_must_be_numeric() {
        assert!(Command::parse("/assumptions monthly_burn_rate lots").is_err());
        assert!(Command::parse("/assumptions monthly_burn_rate").is_err());
    }

    #[test]
    fn test_parse_chat() {
        assert_eq!(
            Command::parse("/chat").unwrap(),
            Command::Chat { opening: None }
        );
        assert_eq!(
            Command::parse("/chat tell me about pricing").unwrap(),
            Command::Chat {
                opening: Some("tell me about pricing".to_string())
            }
        );
    }

    #[test]
    fn test_parse_missing_idea() {
        assert!(Command::parse("/analyze").is_err());
    }

    #[test]
    fn test_parse_help_and_exit() {
        assert_eq!(Command::parse("/help").unwrap(), Command::Help);
        assert_eq!(Command::parse("/?").unwrap(), Command::Help);
        assert_eq!(Command::parse("/quit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(Command::parse("/frobnicate").is_err());
    }
}
