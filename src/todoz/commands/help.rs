use crate::commands::{CmdMessage, CmdResult};

const COMMANDS: [(&str, &str); 11] = [
    ("ls", "list your todos, starting from the first page"),
    ("next", "show the next page"),
    ("prev", "show the previous page"),
    ("new", "create a new todo"),
    ("done N", "mark todo N as done"),
    ("undone N", "mark todo N as not done"),
    ("start N", "mark todo N as started"),
    ("stop N", "mark todo N as not started"),
    ("rm N", "remove todo N"),
    ("help", "show this help"),
    ("exit", "exit the program"),
];

pub fn run() -> CmdResult {
    let mut result = CmdResult::default().with_message(CmdMessage::info("Commands:"));
    for (usage, description) in COMMANDS {
        result.add_message(CmdMessage::info(format!("  \"{}\" to {}", usage, description)));
    }
    result
}
