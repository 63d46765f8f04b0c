//! REPL command registry and handlers.
//!
//! The registry is built once at startup and passed by reference into the
//! read loop. Handlers write to an injected writer so they can be driven
//! from tests.

use std::io::Write;

use rand::Rng;
use tracing::debug;

use crate::api::Pokemon;
use crate::error::{PokedexError, Result};
use crate::repl::catch::{attempt_catch, catch_rate};
use crate::repl::Session;

/// Printed when the REPL shuts down
pub const GOODBYE: &str = "Closing the Pokedex... Goodbye!";

/// What a command does when invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Exit,
    Help,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// Whether the read loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A named entry in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub action: Action,
}

/// Commands in registration order.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full Pokedex command set.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("exit", "Exit the Pokedex", Action::Exit);
        registry.register("help", "Displays a help message", Action::Help);
        registry.register("map", "Displays next page of location areas", Action::Map);
        registry.register(
            "mapb",
            "Displays previous page of location areas",
            Action::MapBack,
        );
        registry.register("explore", "Shows pokemon in an area", Action::Explore);
        registry.register("catch", "Attempt to catch a pokemon", Action::Catch);
        registry.register("inspect", "Inspect a caught pokemon", Action::Inspect);
        registry.register("pokedex", "List caught pokemon", Action::Pokedex);
        registry
    }

    /// Adds a command, replacing any earlier one with the same name.
    pub fn register(&mut self, name: &'static str, description: &'static str, action: Action) {
        let command = Command {
            name,
            description,
            action,
        };
        match self.commands.iter_mut().find(|c| c.name == name) {
            Some(existing) => *existing = command,
            None => self.commands.push(command),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Runs `command` against the session, writing its output to `out`.
    pub async fn execute<R: Rng, W: Write>(
        &self,
        command: &Command,
        session: &mut Session<R>,
        args: &[String],
        out: &mut W,
    ) -> Result<Flow> {
        debug!("Running command {} with args {:?}", command.name, args);

        match command.action {
            Action::Exit => {
                writeln!(out, "{}", GOODBYE)?;
                return Ok(Flow::Exit);
            }
            Action::Help => self.help(out)?,
            Action::Map => map_next(session, out).await?,
            Action::MapBack => map_back(session, out).await?,
            Action::Explore => explore(session, first_arg(args, "an area name")?, out).await?,
            Action::Catch => catch(session, first_arg(args, "a pokemon name")?, out).await?,
            Action::Inspect => inspect(session, first_arg(args, "a pokemon name")?, out)?,
            Action::Pokedex => list_pokedex(session, out)?,
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out)?;
        writeln!(out, "Usage:")?;
        for command in self.iter() {
            writeln!(out, "{}: {}", command.name, command.description)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

fn first_arg<'a>(args: &'a [String], what: &'static str) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or(PokedexError::MissingArgument(what))
}

async fn map_next<R: Rng, W: Write>(session: &mut Session<R>, out: &mut W) -> Result<()> {
    let url = session.cursor.next.clone();
    let page = session.load_location_page(url.as_deref()).await?;

    writeln!(out)?;
    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    writeln!(out)?;
    Ok(())
}

async fn map_back<R: Rng, W: Write>(session: &mut Session<R>, out: &mut W) -> Result<()> {
    let Some(url) = session.cursor.previous.clone() else {
        writeln!(out)?;
        writeln!(out, "you're on the first page")?;
        return Ok(());
    };
    let page = session.load_location_page(Some(&url)).await?;

    writeln!(out)?;
    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    writeln!(out)?;
    Ok(())
}

async fn explore<R: Rng, W: Write>(
    session: &mut Session<R>,
    area: &str,
    out: &mut W,
) -> Result<()> {
    let location = session.client.location_area(area).await?;

    writeln!(out)?;
    writeln!(out, "Exploring {}", area)?;
    writeln!(out, "Found Pokemon:")?;
    for encounter in &location.pokemon_encounters {
        writeln!(out, " - {}", encounter.pokemon.name)?;
    }
    writeln!(out)?;
    Ok(())
}

async fn catch<R: Rng, W: Write>(session: &mut Session<R>, name: &str, out: &mut W) -> Result<()> {
    let pokemon = session.client.pokemon(name).await?;
    let base_experience = pokemon.base_experience.unwrap_or(0);
    debug!(
        "Catch rate for {} is {}/256",
        name,
        catch_rate(base_experience)
    );

    writeln!(out)?;
    writeln!(out, "Throwing a Pokeball at {}...", name)?;

    if attempt_catch(base_experience, &mut session.rng) {
        writeln!(out, "{} was caught!", name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        session.pokedex.insert(name, pokemon);
    } else {
        writeln!(out, "{} escaped!", name)?;
    }
    writeln!(out)?;
    Ok(())
}

fn inspect<R, W: Write>(session: &Session<R>, name: &str, out: &mut W) -> Result<()> {
    match session.pokedex.get(name) {
        Some(pokemon) => write_details(pokemon, out),
        None => {
            writeln!(out)?;
            writeln!(out, "you have not caught that pokemon")?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_details<W: Write>(pokemon: &Pokemon, out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "    -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for pokemon_type in &pokemon.types {
        writeln!(out, "    - {}", pokemon_type.kind.name)?;
    }
    writeln!(out)?;
    Ok(())
}

fn list_pokedex<R, W: Write>(session: &Session<R>, out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Your Pokedex:")?;
    for (name, _) in session.pokedex.iter() {
        writeln!(out, " - {}", name)?;
    }
    writeln!(out)?;
    Ok(())
}
