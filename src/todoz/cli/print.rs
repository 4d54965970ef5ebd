use colored::Colorize;
use std::io::{self, Write};
use todoz::codec::render;
use todoz::commands::{CmdMessage, DisplayTodo, MessageLevel};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_todos<W: Write>(out: &mut W, todos: &[DisplayTodo]) -> io::Result<()> {
    for dt in todos {
        writeln!(out, "{}", render(&dt.todo, Some(dt.number)))?;
    }
    Ok(())
}
