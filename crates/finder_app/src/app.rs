use std::io::{self, BufRead, Write};

use anyhow::Result;
use finder_core::{update, AppState, AssetType, FormInput, IdentifierKind, Msg};
use finder_engine::ClientSettings;

use crate::effects::EffectRunner;
use crate::render;

const HELP: &str = "\
Commands:
  type <asset>        select asset type (DataExtensions, CloudPages, Emails,
                      Queries, Scripts, ImportActivities, FilterActivities)
  key <selector>      choose the identifier key (Name, CustomerKey, ID)
  check <id> | all    select a relation category checkbox
  uncheck <id> | all  clear a relation category checkbox
  form                show the current form state
  find <identifier>   submit the lookup
  toggle <n>          expand/collapse section n
  help                show this help
  quit                exit";

pub fn run(settings: ClientSettings) -> Result<()> {
    let runner = EffectRunner::new(settings);
    let mut state = AppState::new();
    let mut form = FormState::default();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Asset Relationship Finder")?;
    writeln!(out, "{HELP}")?;
    render::paint(&mut out, &state.view())?;
    prompt(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(line.trim(), &state, &mut form, &mut out)? {
            Action::Quit => break,
            Action::Help => writeln!(out, "{HELP}")?,
            Action::None => {}
            Action::Dispatch(msg) => {
                let type_switched = matches!(msg, Msg::AssetTypeSelected(_));
                let (next, effects) = update(state, msg);
                state = next;
                if state.consume_dirty() {
                    render::paint(&mut out, &state.view())?;
                }
                if type_switched {
                    form.reset_for(state.selected());
                    print_form(&mut out, &state, &form)?;
                }
                // The submit control stays disabled while the lookup is in
                // flight: this loop does not read further input until the
                // dispatched lookup settles.
                if let Some(generation) = runner.run(effects) {
                    let msg = runner.wait_settled(generation);
                    let (next, _effects) = update(state, msg);
                    state = next;
                    if state.consume_dirty() {
                        render::paint(&mut out, &state.view())?;
                    }
                }
            }
        }
        prompt(&mut out)?;
    }

    Ok(())
}

enum Action {
    Quit,
    Help,
    None,
    Dispatch(Msg),
}

/// Form-side widget state: the key selector and checkbox values the next
/// submit will snapshot into a [`FormInput`].
#[derive(Default)]
struct FormState {
    key: Option<IdentifierKind>,
    checked: Vec<(String, bool)>,
}

impl FormState {
    fn reset_for(&mut self, asset_type: Option<AssetType>) {
        self.key = asset_type.and_then(|t| t.descriptor().key_selectors.first().copied());
        self.checked = asset_type
            .map(|t| {
                t.descriptor()
                    .categories
                    .iter()
                    .map(|category| (category.id.to_string(), false))
                    .collect()
            })
            .unwrap_or_default();
    }

    fn set_checked(&mut self, id: &str, on: bool) -> bool {
        match self.checked.iter_mut().find(|(known, _)| known == id) {
            Some((_, value)) => {
                *value = on;
                true
            }
            None => false,
        }
    }

    fn set_all(&mut self, on: bool) {
        for (_, value) in &mut self.checked {
            *value = on;
        }
    }

    fn input(&self, identifier: String) -> FormInput {
        FormInput {
            identifier,
            key: self.key,
            checked: self.checked.clone(),
        }
    }
}

fn parse_command(
    line: &str,
    state: &AppState,
    form: &mut FormState,
    out: &mut impl Write,
) -> Result<Action> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let action = match command {
        "" => Action::None,
        "quit" | "exit" => Action::Quit,
        "help" => Action::Help,
        "type" => Action::Dispatch(Msg::AssetTypeSelected(rest.to_string())),
        "key" => {
            set_key(rest, state, form, out)?;
            Action::None
        }
        "check" | "uncheck" => {
            let on = command == "check";
            if rest == "all" {
                form.set_all(on);
            } else if !form.set_checked(rest, on) {
                writeln!(out, "No checkbox named '{rest}' on this form.")?;
            }
            Action::None
        }
        "form" => {
            print_form(out, state, form)?;
            Action::None
        }
        "find" => Action::Dispatch(Msg::FormSubmitted(form.input(rest.to_string()))),
        "toggle" => match rest.parse::<usize>() {
            Ok(number) if number >= 1 => Action::Dispatch(Msg::SectionToggled { index: number - 1 }),
            _ => {
                writeln!(out, "Usage: toggle <section number>")?;
                Action::None
            }
        },
        other => {
            writeln!(out, "Unknown command '{other}'. Try 'help'.")?;
            Action::None
        }
    };

    Ok(action)
}

fn set_key(
    raw: &str,
    state: &AppState,
    form: &mut FormState,
    out: &mut impl Write,
) -> Result<()> {
    let kind = match raw.to_ascii_lowercase().as_str() {
        "name" => Some(IdentifierKind::Name),
        "customerkey" => Some(IdentifierKind::CustomerKey),
        "id" => Some(IdentifierKind::Id),
        _ => None,
    };
    let allowed = state
        .selected()
        .map(|t| t.descriptor().key_selectors)
        .unwrap_or(&[]);
    match kind {
        Some(kind) if allowed.contains(&kind) => form.key = Some(kind),
        _ => writeln!(
            out,
            "This form accepts: {}",
            allowed
                .iter()
                .map(key_label)
                .collect::<Vec<_>>()
                .join(", ")
        )?,
    }
    Ok(())
}

fn print_form(out: &mut impl Write, state: &AppState, form: &FormState) -> Result<()> {
    let Some(asset_type) = state.selected() else {
        writeln!(out, "No asset type selected yet.")?;
        return Ok(());
    };
    let descriptor = asset_type.descriptor();
    if let Some(key) = form.key {
        writeln!(out, "Key: {}", key_label(&key))?;
    }
    for category in descriptor.categories {
        let on = form
            .checked
            .iter()
            .any(|(id, on)| *on && id == category.id);
        writeln!(out, "  [{}] {} — {}", if on { "x" } else { " " }, category.id, category.title)?;
    }
    Ok(())
}

fn key_label(kind: &IdentifierKind) -> &'static str {
    match kind {
        IdentifierKind::Name => "Name",
        IdentifierKind::CustomerKey => "CustomerKey",
        IdentifierKind::Id => "ID",
    }
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
