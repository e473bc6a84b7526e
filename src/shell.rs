//! Line commands for driving a board from a terminal

use std::path::Path;

use crate::board::Board;
use crate::persistence;
use crate::settings::Settings;

pub const HELP: &str = "\
commands:
  list                 images on the current page
  select <image>       open a category or speak an item
  add <image> <text>   add an item (a category when at home)
  remove <image>       remove an item (a category when at home)
  reset                go back home
  category             name of the open category
  has <image>          whether an image is anywhere on the board
  save [path]          write the board file
  help                 this text
  quit                 leave";

/// Shown for the home page, which has no name
pub const HOME_LABEL: &str = "(home)";

/// A parsed shell line, borrowing from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    List,
    Select(&'a str),
    Add { image_loc: &'a str, text: &'a str },
    Remove(&'a str),
    Reset,
    Category,
    Has(&'a str),
    Save(Option<&'a str>),
    Help,
    Quit,
    /// Blank input
    Empty,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }
        let (verb, rest) = match line.split_once(' ') {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "list" | "ls" => Command::List,
            "select" | "s" if !rest.is_empty() => Command::Select(rest),
            "add" if !rest.is_empty() => match rest.split_once(' ') {
                Some((image_loc, text)) => Command::Add {
                    image_loc,
                    text: text.trim(),
                },
                None => Command::Add {
                    image_loc: rest,
                    text: "",
                },
            },
            "remove" | "rm" if !rest.is_empty() => Command::Remove(rest),
            "reset" | "home" => Command::Reset,
            "category" => Command::Category,
            "has" if !rest.is_empty() => Command::Has(rest),
            "save" => Command::Save(Some(rest).filter(|path| !path.is_empty())),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line),
        }
    }
}

/// What a command printed and whether the shell should stop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub output: Vec<String>,
    pub quit: bool,
}

impl Outcome {
    fn say(line: impl Into<String>) -> Self {
        Self {
            output: vec![line.into()],
            quit: false,
        }
    }
}

/// Run one command against `board`
pub fn execute(board: &mut Board, command: Command<'_>, settings: &Settings) -> Outcome {
    match command {
        Command::List => Outcome {
            output: board.image_locs(),
            quit: false,
        },
        Command::Select(image_loc) => select(board, image_loc, settings),
        Command::Add { image_loc, text } => {
            board.add_item(image_loc, text);
            Outcome::say(format!("added {}", image_loc))
        }
        Command::Remove(image_loc) => {
            if board.remove_item(image_loc) {
                Outcome::say(format!("removed {}", image_loc))
            } else {
                Outcome::say(format!("not found: {}", image_loc))
            }
        }
        Command::Reset => {
            board.reset();
            Outcome::say(HOME_LABEL)
        }
        Command::Category => {
            if board.is_home() {
                Outcome::say(HOME_LABEL)
            } else {
                Outcome::say(board.category())
            }
        }
        Command::Has(image_loc) => Outcome::say(if board.has_image(image_loc) {
            "yes"
        } else {
            "no"
        }),
        Command::Save(path) => {
            let path = path.map(Path::new).unwrap_or(settings.board_file.as_path());
            match persistence::write_file(board, path) {
                Ok(()) => Outcome::say(format!("saved {}", path.display())),
                Err(err) => Outcome::say(format!("save failed: {}", err)),
            }
        }
        Command::Help => Outcome::say(HELP),
        Command::Quit => Outcome {
            output: Vec::new(),
            quit: true,
        },
        Command::Empty => Outcome::default(),
        Command::Unknown(line) => Outcome::say(format!("unknown command: {} (try help)", line)),
    }
}

fn select(board: &mut Board, image_loc: &str, settings: &Settings) -> Outcome {
    let was_home = board.is_home();
    match board.select(image_loc) {
        Ok(text) if !was_home => Outcome::say(format!("{}{}", settings.speak_prefix, text)),
        Ok(_) => {
            let mut outcome = Outcome::say(format!("opened {}", board.category()));
            if settings.show_locations_on_enter {
                outcome.output.extend(board.image_locs());
            }
            outcome
        }
        Err(err) => Outcome::say(err.to_string()),
    }
}
