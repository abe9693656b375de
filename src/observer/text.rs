//! Human-readable fight lines for the console and the fight log file

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

use crate::core::error::Result;
use crate::entity::{Npc, NpcRef};
use crate::observer::FightObserver;

/// Writes one line per fight to any `Write`
#[derive(Debug)]
pub struct TextObserver<W: Write> {
    out: W,
}

/// The file-backed flavour
pub type FileObserver = TextObserver<BufWriter<File>>;

impl<W: Write> TextObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextObserver<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl FileObserver {
    /// Truncates any existing log at `path`
    pub fn create_file(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> FightObserver for TextObserver<W> {
    fn on_fight(&mut self, attacker: &NpcRef, defender: &NpcRef, won: bool) -> Result<()> {
        writeln!(self.out, "{}", fight_line(attacker, defender, won))?;
        Ok(())
    }
}

/// `Toad Toad_1 (10, 20) killed Knight Knight_4 (12, 21)`
pub fn fight_line(attacker: &Npc, defender: &Npc, won: bool) -> String {
    let verb = if won { "killed" } else { "failed to kill" };
    format!(
        "{} {} {} {} {}",
        attacker,
        attacker.position(),
        verb,
        defender,
        defender.position()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Variant;

    #[test]
    fn test_writes_one_line_per_fight() {
        let toad = Npc::spawn(Variant::Toad, "Toad_1", 10, 20).unwrap();
        let knight = Npc::spawn(Variant::Knight, "Knight_4", 12, 21).unwrap();
        let mut observer = TextObserver::new(Vec::new());

        observer.on_fight(&toad, &knight, true).unwrap();
        observer.on_fight(&knight, &toad, false).unwrap();

        let text = String::from_utf8(observer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Toad Toad_1 (10, 20) killed Knight Knight_4 (12, 21)",
                "Knight Knight_4 (12, 21) failed to kill Toad Toad_1 (10, 20)",
            ]
        );
    }

    #[test]
    fn test_file_observer_writes_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fights.txt");
        let dragon = Npc::spawn(Variant::Dragon, "D", 0, 0).unwrap();
        let knight = Npc::spawn(Variant::Knight, "K", 0, 1).unwrap();

        let mut observer = FileObserver::create_file(&path).unwrap();
        observer.on_fight(&dragon, &knight, true).unwrap();
        observer.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Dragon D (0, 0) killed Knight K (0, 1)\n");
    }
}
