use crate::document::{Container, ListLine};

const LEVEL_INDENT: &str = "    ";

/// An open container and the source indentation of its items.
#[derive(Debug, Clone, Copy)]
struct Frame {
    container: Container,
    indent: usize,
}

impl Frame {
    fn depth(&self) -> usize {
        self.indent / 2
    }
}

#[derive(Default)]
struct ListState {
    stack: Vec<Frame>,
    out: Vec<String>,
}

impl ListState {
    fn item(&mut self, container: Container, indent: usize, text: &str) {
        while self.stack.last().is_some_and(|top| top.indent > indent) {
            self.close();
        }

        let frame = Frame { container, indent };
        match self.stack.last().copied() {
            Some(top) if top.indent == indent && top.container == container => {}
            Some(top) if top.indent == indent => {
                // Same level, other kind of list
                self.close();
                self.open(frame);
            }
            _ => self.open(frame),
        }

        self.out.push(format!(
            "{}<li> {} </li>",
            LEVEL_INDENT.repeat(indent / 2 + 1),
            text
        ));
    }

    fn open(&mut self, frame: Frame) {
        tracing::trace!(
            container = ?frame.container,
            indent = frame.indent,
            "open list container"
        );
        self.out.push(format!(
            "{}{}",
            LEVEL_INDENT.repeat(frame.depth()),
            frame.container.open_tag()
        ));
        self.stack.push(frame);
    }

    fn close(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.out.push(format!(
                "{}{}",
                LEVEL_INDENT.repeat(frame.depth()),
                frame.container.close_tag()
            ));
        }
    }

    fn close_all(&mut self) {
        while !self.stack.is_empty() {
            self.close();
        }
    }
}

/// Wrap every run of list items in container markup.
///
/// Lines that are not list items pass through unchanged; they end any open
/// list first.
pub fn restructure_lists(body: &str) -> String {
    let mut state = ListState::default();

    for line in body.split('\n') {
        let parsed = ListLine::classify(line);
        match parsed.container() {
            Some(container) => state.item(container, parsed.indent, parsed.text),
            None => {
                state.close_all();
                state.out.push(line.to_string());
            }
        }
    }

    state.close_all();
    state.out.join("\n")
}
