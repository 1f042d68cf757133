use std::io::{BufRead, Write};

use anyhow::Context;
use contact_form_config::Config;
use contact_form_core_form_impl::{ContactForm, FormValidatorImpl, FormView};
use contact_form_models::form::Field;
use contact_form_templates_contracts::{FormTemplate, SummaryTemplate, TemplateService};
use contact_form_templates_impl::TemplateServiceImpl;
use tracing::debug;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const USAGE: &str =
    "commands: first-name <text> | last-name <text> | email <text> | message <text> | submit | quit";

/// Line-oriented event loop over stdin. Each line is one event; the current
/// view is re-rendered after every event.
pub fn run(config: Config) -> anyhow::Result<()> {
    let templates = TemplateServiceImpl::default();
    let mut form = ContactForm::new(FormValidatorImpl);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    render(&config, &templates, &form, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;

        match Event::parse(&line) {
            Some(Event::Set(field, value)) => form.set(field, value),
            Some(Event::Submit) => {
                // The outcome is reflected in the rendered view.
                let _ = form.submit();
            }
            Some(Event::Quit) => break,
            None => {
                if !line.trim().is_empty() {
                    debug!(line, "unknown input");
                    writeln!(stdout, "{USAGE}").context("Failed to write to stdout")?;
                }
                continue;
            }
        }

        render(&config, &templates, &form, &mut stdout)?;
    }

    Ok(())
}

fn render(
    config: &Config,
    templates: &TemplateServiceImpl,
    form: &ContactForm<FormValidatorImpl>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let rendered = match form.view() {
        FormView::Editing { values, errors } => {
            templates.render(&FormTemplate::new(values, errors))
        }
        FormView::Submitted(submitted) => templates.render(&SummaryTemplate::from(submitted)),
    }
    .context("Failed to render view")?;

    if config.ui.ansi {
        write!(out, "{CLEAR_SCREEN}").context("Failed to write to stdout")?;
    }
    write!(out, "{rendered}{}", config.ui.prompt).context("Failed to write to stdout")?;
    out.flush().context("Failed to flush stdout")
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Set(Field, String),
    Submit,
    Quit,
}

impl Event {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line {
            "submit" => Some(Self::Submit),
            "quit" | "exit" => Some(Self::Quit),
            _ => {
                let (field, value) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
                let field = field.parse().ok()?;
                Some(Self::Set(field, value.trim_start().to_owned()))
            }
        }
    }
}
