//! Owned dashboard state
//!
//! The workbench is the single holder of page-level state: the current
//! analysis run, the current conversation, and the guard that keeps one
//! submission in flight at a time. The REPL hands it one input line at a
//! time and it prints whatever the command produces.

use crate::commands::Command;
use crate::render;
use anyhow::{Result, bail};
use std::sync::Arc;
use venture_analysis::{AnalysisPipeline, AnalysisRun, IdeaInput};
use venture_api::ApiClient;
use venture_chat::ChatSession;

/// What the REPL should do after one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Dashboard,
    Conversation,
}

/// Opening prompts offered when entering a fresh conversation
const SUGGESTIONS: [&str; 3] = [
    "mental health tracking app",
    "freelance skill verification platform",
    "electric vehicle charging location",
];

pub struct Workbench {
    client: Arc<ApiClient>,
    pipeline: AnalysisPipeline,
    run: Option<AnalysisRun>,
    session: Option<ChatSession>,
    mode: Mode,
    run_in_flight: bool,
}

impl Workbench {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let pipeline = AnalysisPipeline::new(client.clone());
        Self {
            client,
            pipeline,
            run: None,
            session: None,
            mode: Mode::Dashboard,
            run_in_flight: false,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.client.config().base_url
    }

    pub fn prompt(&self) -> &'static str {
        match self.mode {
            Mode::Dashboard => "venture> ",
            Mode::Conversation => "chat> ",
        }
    }

    /// Handle one line of user input
    pub async fn process_input(&mut self, input: &str) -> Result<Flow> {
        match self.mode {
            Mode::Conversation => self.process_chat_input(input).await,
            Mode::Dashboard => {
                let command = Command::parse(input)?;
                self.dispatch(command).await
            }
        }
    }

    async fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Analyze { idea } => {
                self.analyze(&idea).await?;
            }
            Command::Financials => {
                self.refresh_financials().await?;
            }
            Command::ShowAssumptions => {
                render::assumptions(self.pipeline.assumptions());
            }
            Command::SetAssumption { field, value } => {
                self.set_assumption(&field, value)?;
            }
            Command::Chat { opening } => {
                self.enter_chat(opening).await?;
            }
            Command::Back => {
                bail!("Not in a conversation");
            }
            Command::Help => {
                println!("{}", Command::help_text());
            }
            Command::Exit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Run the full pipeline for one idea and render the dashboard
    ///
    /// A new run replaces the previous one and all its partial state. On
    /// failure the error is propagated as the single line the caller prints;
    /// no partial dashboard is ever rendered.
    pub async fn analyze(&mut self, idea_text: &str) -> Result<()> {
        if self.run_in_flight {
            bail!("An analysis is already in flight");
        }
        let idea = IdeaInput::new(idea_text)?;

        self.run = None;
        self.run_in_flight = true;

        let mut run = AnalysisRun::new(idea);
        println!("Analyzing \"{}\"", run.idea());

        let mut done = 0;
        let outcome = self
            .pipeline
            .run(&mut run, |stage| {
                done += 1;
                println!("  [{done}/5] {stage} ready");
            })
            .await;

        self.run_in_flight = false;

        match outcome {
            Ok(()) => {
                if let Some(bundle) = run.results() {
                    render::dashboard(run.idea().as_str(), bundle);
                }
                self.run = Some(run);
                Ok(())
            }
            Err(failure) => {
                self.run = Some(run);
                Err(failure.into())
            }
        }
    }

    /// Re-run only the financial stage of the current analysis
    async fn refresh_financials(&mut self) -> Result<()> {
        let Some(run) = self.run.as_mut() else {
            bail!("No completed analysis to update");
        };

        println!("Updating financial projection...");
        self.pipeline.refresh_financials(run).await?;

        if let Some(bundle) = run.results() {
            if let Some(projection) = &bundle.financials {
                let estimate = bundle
                    .research
                    .as_ref()
                    .and_then(|r| r.investment_estimate.as_ref());
                render::financial_section(projection, estimate);
            }
        }
        Ok(())
    }

    fn set_assumption(&mut self, field: &str, value: f64) -> Result<()> {
        let mut assumptions = self.pipeline.assumptions().clone();
        match field {
            "initial_revenue" => assumptions.initial_revenue = value,
            "revenue_growth_rate" => assumptions.revenue_growth_rate = value,
            "cogs_percentage" => assumptions.cogs_percentage = value,
            "operating_expenses" => assumptions.operating_expenses = value,
            "initial_capital" => assumptions.initial_capital = value,
            "monthly_burn_rate" => assumptions.monthly_burn_rate = value,
            "customer_acquisition_cost" => assumptions.customer_acquisition_cost = value,
            "lifetime_value" => assumptions.lifetime_value = value,
            other => bail!("Unknown assumption field: {other} (see /help for the list)"),
        }
        self.pipeline.set_assumptions(assumptions);
        println!("Set {field} = {value}. Apply it with /financials.");
        Ok(())
    }

    /// Enter conversation mode, starting a fresh session if needed
    ///
    /// An ended session cannot be resumed; entering chat after termination
    /// constructs a new one.
    async fn enter_chat(&mut self, opening: Option<String>) -> Result<()> {
        let fresh = !matches!(&self.session, Some(session) if !session.is_ended());
        if fresh {
            self.session = Some(ChatSession::new(self.client.clone()));
        }
        self.mode = Mode::Conversation;
        println!("Conversation mode: plain text goes to the agent, /back returns.");

        match opening {
            Some(opening) if fresh => self.deliver_initial(&opening).await,
            Some(opening) => self.deliver(&opening).await,
            None => {
                if fresh {
                    println!("Try one of:");
                    for suggestion in SUGGESTIONS {
                        println!("  - {suggestion}");
                    }
                }
                Ok(())
            }
        }
    }

    async fn process_chat_input(&mut self, input: &str) -> Result<Flow> {
        match input {
            "/back" | "/b" => {
                self.mode = Mode::Dashboard;
                println!("Back to the dashboard.");
                Ok(Flow::Continue)
            }
            "/exit" | "/quit" | "/q" => Ok(Flow::Quit),
            "/help" | "/h" => {
                println!(
                    "Conversation mode: plain text is sent to the agent; /back returns to the dashboard."
                );
                Ok(Flow::Continue)
            }
            _ if input.starts_with('/') => {
                bail!("Unknown command in conversation mode (leave with /back)");
            }
            message => {
                self.deliver(message).await?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn deliver(&mut self, message: &str) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            bail!("No active conversation; enter one with /chat");
        };
        session.send(message).await?;
        self.print_last_reply();
        self.finish_round();
        Ok(())
    }

    /// First message goes through the idempotent initial-send path
    async fn deliver_initial(&mut self, message: &str) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            bail!("No active conversation; enter one with /chat");
        };
        if session.send_initial(message).await?.is_some() {
            self.print_last_reply();
            self.finish_round();
        }
        Ok(())
    }

    fn print_last_reply(&self) {
        if let Some(last) = self.session.as_ref().and_then(|s| s.transcript().last()) {
            render::transcript_line(last);
        }
    }

    fn finish_round(&mut self) {
        if self.session.as_ref().is_some_and(ChatSession::is_ended) {
            println!("The agent has closed this conversation.");
            let summary = self
                .session
                .as_ref()
                .and_then(ChatSession::latest_agent_summary);
            if let Some(summary) = summary {
                println!("Summary: {summary}");
            }
            self.mode = Mode::Dashboard;
        }
    }
}
