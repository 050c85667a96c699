//! Interactive menu loop driving the task store.

use std::io::{self, Write};

use console::style;

use crate::cli::Display;
use crate::error::{Result, TaskpadError};
use crate::store::TaskStore;

/// One menu entry, addressed by the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTask,
    ViewAll,
    ViewPending,
    MarkComplete,
    MarkIncomplete,
    EditTask,
    RemoveTask,
    ClearCompleted,
    Stats,
    Exit,
}

impl MenuChoice {
    /// Parse raw menu input. `None` means re-prompt.
    fn from_input(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(Self::AddTask),
            2 => Some(Self::ViewAll),
            3 => Some(Self::ViewPending),
            4 => Some(Self::MarkComplete),
            5 => Some(Self::MarkIncomplete),
            6 => Some(Self::EditTask),
            7 => Some(Self::RemoveTask),
            8 => Some(Self::ClearCompleted),
            9 => Some(Self::Stats),
            10 => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Exiting,
}

/// The interactive session: renders the menu, reads a choice, dispatches
/// into the store, reports the outcome, and repeats until Exit.
///
/// Store failures are recovered here and reported to the user; the only
/// errors that end the session are failures to read stdin itself.
pub struct MenuSession {
    display: Display,
    store: TaskStore,
}

impl MenuSession {
    pub fn new(store: TaskStore) -> Self {
        Self {
            display: Display::new(),
            store,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.display.print_menu();
            let choice = self.prompt_choice()?;

            if self.dispatch(choice)? == LoopState::Exiting {
                return Ok(());
            }

            self.wait_for_enter("\nPress Enter to continue...")?;
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<LoopState> {
        match choice {
            MenuChoice::AddTask => self.handle_add()?,
            MenuChoice::ViewAll => self
                .display
                .print_all_tasks(self.store.tasks(), self.store.stats()),
            MenuChoice::ViewPending => self.display.print_pending_tasks(self.store.tasks()),
            MenuChoice::MarkComplete => self.handle_set_completed(true)?,
            MenuChoice::MarkIncomplete => self.handle_set_completed(false)?,
            MenuChoice::EditTask => self.handle_edit()?,
            MenuChoice::RemoveTask => self.handle_remove()?,
            MenuChoice::ClearCompleted => self.handle_clear_completed()?,
            MenuChoice::Stats => self.display.print_stats(self.store.stats()),
            MenuChoice::Exit => {
                self.print_farewell();
                return Ok(LoopState::Exiting);
            }
        }
        Ok(LoopState::Running)
    }

    fn handle_add(&mut self) -> Result<()> {
        let description = self.prompt_text("\nEnter new task: ")?;
        if description.is_empty() {
            self.display.print_warning("Task cannot be empty!");
            return Ok(());
        }

        match self.store.add(&description) {
            Ok(task) => {
                let message = format!("Task added: '{}'", task.description);
                self.display.print_success(&message);
            }
            Err(e) => self.report(&e),
        }
        Ok(())
    }

    fn handle_set_completed(&mut self, completed: bool) -> Result<()> {
        self.display
            .print_all_tasks(self.store.tasks(), self.store.stats());

        let state = if completed { "complete" } else { "incomplete" };
        let prompt = format!("Enter task number to mark as {}: ", state);
        let index = match self.prompt_task_number(&prompt)? {
            Some(index) => index,
            None => return Ok(()),
        };

        match self.store.set_completed(index, completed) {
            Ok(task) => self.display.print_success(&format!(
                "Task marked as {}: '{}'",
                state, task.description
            )),
            Err(e) => self.report(&e),
        }
        Ok(())
    }

    fn handle_edit(&mut self) -> Result<()> {
        self.display
            .print_all_tasks(self.store.tasks(), self.store.stats());

        let index = match self.prompt_task_number("Enter task number to edit: ")? {
            Some(index) => index,
            None => return Ok(()),
        };
        let current = match self.store.get(index) {
            Ok(task) => task.description.clone(),
            Err(e) => {
                self.report(&e);
                return Ok(());
            }
        };

        self.display
            .print_info(&format!("Current task: {}", current));
        let new_description = self.prompt_text("Enter new task description: ")?;
        if new_description.is_empty() {
            self.display.print_warning("Task description cannot be empty!");
            return Ok(());
        }

        match self.store.edit(index, &new_description) {
            Ok(old) => self
                .display
                .print_success(&format!("Task updated: '{}' → '{}'", old, new_description)),
            Err(e) => self.report(&e),
        }
        Ok(())
    }

    fn handle_remove(&mut self) -> Result<()> {
        self.display
            .print_all_tasks(self.store.tasks(), self.store.stats());

        let index = match self.prompt_task_number("Enter task number to remove: ")? {
            Some(index) => index,
            None => return Ok(()),
        };
        let target = match self.store.get(index) {
            Ok(task) => task.description.clone(),
            Err(e) => {
                self.report(&e);
                return Ok(());
            }
        };

        let prompt = format!("Are you sure you want to remove '{}'? (y/N): ", target);
        if !self.confirm(&prompt)? {
            self.display.print_info("Task removal cancelled.");
            return Ok(());
        }

        match self.store.remove(index) {
            Ok(removed) => self
                .display
                .print_success(&format!("Task removed: '{}'", removed.description)),
            Err(e) => self.report(&e),
        }
        Ok(())
    }

    fn handle_clear_completed(&mut self) -> Result<()> {
        let completed = self.store.completed_descriptions();
        if completed.is_empty() {
            self.display.print_warning("No completed tasks to clear!");
            return Ok(());
        }

        println!();
        println!("Found {} completed task(s):", completed.len());
        for description in &completed {
            println!("  • {}", description);
        }

        let prompt = format!(
            "\nAre you sure you want to delete these {} completed task(s)? (y/N): ",
            completed.len()
        );
        if !self.confirm(&prompt)? {
            self.display.print_info("Operation cancelled.");
            return Ok(());
        }

        match self.store.clear_completed() {
            Ok(cleared) => self
                .display
                .print_success(&format!("{} completed task(s) cleared!", cleared)),
            Err(e) => self.report(&e),
        }
        Ok(())
    }

    fn print_farewell(&self) {
        println!();
        println!("{}", style("Thank you for using Taskpad!").bold());

        let stats = self.store.stats();
        if stats.total > 0 {
            if stats.pending > 0 {
                self.display.print_info(&format!(
                    "You have {} pending task(s) remaining.",
                    stats.pending
                ));
            } else {
                self.display
                    .print_success("Congratulations! All tasks completed!");
            }
        }

        println!("Your tasks are saved in '{}'", self.store.file_label());
        println!("Goodbye!");
    }

    fn report(&self, err: &TaskpadError) {
        if err.is_validation() {
            self.display.print_warning(&err.to_string());
        } else {
            self.display
                .print_error(&format!("Failed to save changes: {}", err));
        }
    }

    fn prompt_choice(&self) -> Result<MenuChoice> {
        loop {
            print!("{}", style("Enter your choice (1-10): ").cyan());
            io::stdout().flush()?;

            match MenuChoice::from_input(&self.read_line()?) {
                Some(choice) => return Ok(choice),
                None => println!(
                    "{}",
                    style("Invalid choice! Please enter a number between 1-10.").red()
                ),
            }
        }
    }

    /// Prompt for a task number within the current valid range,
    /// re-prompting on invalid or non-numeric input. `None` when the list
    /// is empty.
    fn prompt_task_number(&self, prompt: &str) -> Result<Option<usize>> {
        if self.store.is_empty() {
            self.display.print_warning("No tasks available!");
            return Ok(None);
        }

        let max = self.store.len();
        loop {
            print!("{}", style(prompt).cyan());
            io::stdout().flush()?;

            match self.read_line()?.parse::<usize>() {
                Ok(n) if n >= 1 && n <= max => return Ok(Some(n)),
                Ok(_) => println!(
                    "{}",
                    style(format!("Please enter a number between 1 and {}", max)).red()
                ),
                Err(_) => println!("{}", style("Please enter a valid number!").red()),
            }
        }
    }

    fn prompt_text(&self, prompt: &str) -> Result<String> {
        print!("{}", style(prompt).cyan());
        io::stdout().flush()?;
        self.read_line()
    }

    /// Only a case-insensitive `y`/`yes` affirms; anything else, including
    /// empty input, cancels.
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = self.prompt_text(prompt)?.to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    fn wait_for_enter(&self, message: &str) -> Result<()> {
        print!("{}", style(message).dim());
        io::stdout().flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Read one trimmed line from stdin. A closed stdin ends the session
    /// instead of spinning on the re-prompt loops.
    fn read_line(&self) -> Result<String> {
        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input)?;
        if bytes == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
        }
        Ok(input.trim().to_string())
    }
}
