//! Interactive menu driver

use crate::core::error::Result;
use crate::ui::color::{Colors, emphasize};
use crate::ui::output::{print_notice, print_warning};
use crate::ui::prompt::{Prompt, is_end_of_input};

pub const CHOICE_PROMPT: &str = "Choose an option (1/2/0)";
pub const CONTINUE_PROMPT: &str = "Press ENTER to return to the main menu";
pub const UNRECOGNIZED_CHOICE: &str = "Unrecognized choice. Please choose 1, 2 or 0.";
pub const GOODBYE: &str = "Goodbye.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    RunningDirectoryScan,
    RunningBreachScan,
    Exit,
}

impl MenuState {
    /// Map a menu choice to the state it selects.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuState::RunningDirectoryScan),
            "2" => Some(MenuState::RunningBreachScan),
            "0" => Some(MenuState::Exit),
            _ => None,
        }
    }

    /// Transition table. `input` is the menu choice in `MainMenu` and the
    /// acknowledgment line in the scan states.
    pub fn next(self, input: &str) -> Self {
        match self {
            MenuState::MainMenu => MenuState::from_choice(input).unwrap_or(MenuState::MainMenu),
            MenuState::RunningDirectoryScan | MenuState::RunningBreachScan => MenuState::MainMenu,
            MenuState::Exit => MenuState::Exit,
        }
    }
}

/// The scans a menu can start.
pub trait MenuActions {
    fn directory_scan(&mut self, prompt: &mut dyn Prompt) -> Result<()>;
    fn breach_scan(&mut self) -> Result<()>;
}

/// Menu driver; `header` is redrawn above the options on every return to the main menu.
#[derive(Debug, Default)]
pub struct Menu {
    header: Option<String>,
}

impl Menu {
    pub fn new(header: Option<String>) -> Self {
        Self { header }
    }

    pub fn options() -> String {
        format!(
            "{}\n1. Directory scan\n2. Data breach scan\n0. Exit",
            emphasize("Options:", Colors::BOLD)
        )
    }

    /// Header (if any) followed by the option list
    pub fn main_screen(&self) -> String {
        match self.header {
            Some(ref header) => format!("{header}\n{}", Self::options()),
            None => Self::options(),
        }
    }

    /// Drive the menu until the user exits or input ends.
    pub fn run(&self, prompt: &mut dyn Prompt, actions: &mut dyn MenuActions) -> Result<()> {
        let mut state = MenuState::MainMenu;

        loop {
            state = match state {
                MenuState::MainMenu => {
                    println!("{}", self.main_screen());
                    let choice = match prompt.read_line(CHOICE_PROMPT) {
                        Ok(choice) => choice,
                        Err(e) if is_end_of_input(&e) => return Self::exit(),
                        Err(e) => return Err(e),
                    };
                    let next = state.next(&choice);
                    if next == MenuState::MainMenu {
                        print_warning(UNRECOGNIZED_CHOICE);
                    }
                    next
                }
                MenuState::RunningDirectoryScan | MenuState::RunningBreachScan => {
                    let outcome = if state == MenuState::RunningDirectoryScan {
                        actions.directory_scan(prompt)
                    } else {
                        actions.breach_scan()
                    };
                    match outcome.and_then(|_| prompt.acknowledge(CONTINUE_PROMPT)) {
                        Ok(()) => state.next(""),
                        Err(e) if is_end_of_input(&e) => MenuState::Exit,
                        Err(e) => return Err(e),
                    }
                }
                MenuState::Exit => return Self::exit(),
            };
        }
    }

    fn exit() -> Result<()> {
        print_notice(GOODBYE);
        Ok(())
    }
}
