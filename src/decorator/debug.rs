use super::Decorator;
use crate::object::Object;
use colored::Colorize;
use std::fmt::{Debug, Formatter, Result};
use std::rc::Rc;

impl<T: Object + 'static> Debug for Decorator<T> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let members: Vec<&str> = self.members().collect();
        writeln!(
            f,
            "{} {}",
            "decorator".bold(),
            format!("[{}]", members.join(", ")).as_str().dimmed()
        )?;

        let mut depth = 0;
        let mut cursor: Option<Rc<dyn Object>> = Some(self.shared_inner());
        while let Some(level) = cursor {
            for _ in 0..depth {
                write!(f, "{}", "    ")?;
            }

            // the level the nested skip reaches
            let marker = if depth == 1 && self.is_nested() {
                " <- nested".yellow().to_string()
            } else {
                String::new()
            };

            writeln!(
                f,
                " └-{} {}{}",
                level.type_name().cyan(),
                level.to_string().as_str().dimmed(),
                marker
            )?;

            cursor = level.decorated();
            depth += 1;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::test_utils::Record;
    use crate::Decorator;

    #[test]
    fn debug_lists_chain() {
        let record = Record::new().with("name", "ada");
        let outer = Decorator::new(Decorator::new(record));
        let rendered = format!("{:?}", outer);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("decorator"));
        assert!(lines[0].contains("undecorated"));
        assert!(lines[1].contains("decorator"));
        assert!(lines[2].contains("record"));
        assert!(lines[2].contains("nested"));
    }

    #[test]
    fn debug_single_level() {
        let decorated = Decorator::new(Record::new().with("id", 7i64));
        let rendered = format!("{:?}", decorated);
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("id"));
        assert!(!rendered.contains("nested"));
    }
}
