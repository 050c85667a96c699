use console::style;

use crate::task::{Task, TaskStats};

pub struct Display;

impl Display {
    pub fn new() -> Self {
        Self
    }

    pub fn print_header(&self, text: &str) {
        println!();
        println!("{}", style(text).bold().cyan());
        println!("{}", style("═".repeat(60)).dim());
    }

    pub fn print_menu(&self) {
        self.print_header("TO-DO LIST MANAGER");
        println!(" 1.  Add Task");
        println!(" 2.  View All Tasks");
        println!(" 3.  View Pending Tasks");
        println!(" 4.  Mark Task as Complete");
        println!(" 5.  Mark Task as Incomplete");
        println!(" 6.  Edit Task");
        println!(" 7.  Remove Task");
        println!(" 8.  Clear Completed Tasks");
        println!(" 9.  Task Statistics");
        println!("10.  Exit");
        println!("{}", style("─".repeat(60)).dim());
    }

    pub fn print_all_tasks(&self, tasks: &[Task], stats: TaskStats) {
        if tasks.is_empty() {
            println!();
            println!("{}", style("No tasks found! Your to-do list is empty.").dim());
            return;
        }

        self.print_header("YOUR TO-DO LIST");
        println!(
            "Total: {}  Completed: {}  Pending: {}",
            style(stats.total).bold(),
            style(stats.completed).green(),
            style(stats.pending).yellow()
        );
        println!("{}", style("─".repeat(60)).dim());

        for (i, task) in tasks.iter().enumerate() {
            self.print_task_line(i + 1, task);
        }
        println!("{}", style("═".repeat(60)).dim());
    }

    pub fn print_pending_tasks(&self, tasks: &[Task]) {
        let pending = tasks.iter().filter(|t| !t.completed).count();
        if pending == 0 {
            println!();
            println!(
                "{}",
                style("Great! No pending tasks. You're all caught up!").green()
            );
            return;
        }

        self.print_header("PENDING TASKS");
        for (i, task) in tasks.iter().enumerate() {
            if !task.completed {
                self.print_task_line(i + 1, task);
            }
        }
        println!("{}", style("═".repeat(60)).dim());
        println!("Total Pending Tasks: {}", style(pending).yellow());
    }

    pub fn print_stats(&self, stats: TaskStats) {
        if stats.total == 0 {
            println!();
            println!("{}", style("No tasks to analyze!").dim());
            return;
        }

        self.print_header("TASK STATISTICS");
        println!("Total Tasks:      {}", stats.total);
        println!("Completed Tasks:  {}", style(stats.completed).green());
        println!("Pending Tasks:    {}", style(stats.pending).yellow());
        println!("Completion Rate:  {:.1}%", stats.completion_rate());
        println!("{}", style("═".repeat(60)).dim());
    }

    pub fn print_success(&self, message: &str) {
        println!("{} {}", style("✓").green().bold(), message);
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red().bold(), message);
    }

    pub fn print_warning(&self, message: &str) {
        println!("{} {}", style("!").yellow().bold(), message);
    }

    pub fn print_info(&self, message: &str) {
        println!("{} {}", style("→").cyan(), message);
    }

    /// Position, completion marker, padded description, status tag, and
    /// the creation timestamp when one is present.
    fn print_task_line(&self, position: usize, task: &Task) {
        let marker = if task.completed {
            style("✓").green()
        } else {
            style("○").dim()
        };
        let tag = if task.completed {
            style("DONE").green()
        } else {
            style("TODO").yellow()
        };
        let created = if task.created.is_empty() {
            String::new()
        } else {
            format!("  (Created: {})", task.created)
        };

        println!(
            "{:>2}. [{}] {:<40} [{}]{}",
            position,
            marker,
            task.description,
            tag,
            style(created).dim()
        );
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
