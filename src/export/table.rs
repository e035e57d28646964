use crate::aggregate::CommonGamesReport;
use crate::library::{OwnedGame, UserLibrary};

/// Header of the last column.
pub const COMMON_GAMES_COLUMN: &str = "Common Games";

/// A rectangular table of strings. Blank cells are `None`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GamesTable {
    /// Column headers: one per user in input order, then [`COMMON_GAMES_COLUMN`].
    pub columns: Vec<String>,
    /// Rows of cells. Every row has one cell per column.
    pub rows: Vec<Vec<Option<String>>>,
}

impl GamesTable {
    /// Builds the table for a report.
    /// 
    /// There are as many rows as the largest library, and always at least one. A user whose
    /// lookup stopped early has their status in the first row only.
    pub fn from_report(report: &CommonGamesReport) -> Self {
        let row_count = report.users
            .iter()
            .map(|user| user.library.row_count())
            .max()
            .unwrap_or(0)
            .max(1);
        let mut columns = report.users
            .iter()
            .map(|user| user.handle.as_str().to_string())
            .collect::<Vec<_>>();
        let mut cells = report.users
            .iter()
            .map(|user| user_cells(&user.library))
            .collect::<Vec<_>>();
        
        columns.push(COMMON_GAMES_COLUMN.to_string());
        cells.push(report.common_games
            .iter()
            .map(|name| format!("{name} (common)"))
            .collect());
        
        let rows = (0..row_count)
            .map(|row| {
                cells
                    .iter()
                    .map(|column| column.get(row).cloned())
                    .collect()
            })
            .collect();
        
        Self {
            columns,
            rows,
        }
    }
    
    /// The cell at `row` in the column named `column`.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.columns.iter().position(|name| name == column)?;
        
        self.rows.get(row)?.get(index)?.as_deref()
    }
}

fn user_cells(library: &UserLibrary) -> Vec<String> {
    match library {
        UserLibrary::Games(games) => games.iter().map(format_game).collect(),
        UserLibrary::Status(status) => vec![status.to_string()],
    }
}

fn format_game(game: &OwnedGame) -> String {
    format!("{} ({} hrs)", game.name, game.playtime_hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::UserResult;
    use crate::enums::LibraryStatus;
    use crate::handle::Handle;
    
    fn games(names: &[(&str, u32)]) -> UserLibrary {
        UserLibrary::Games(names
            .iter()
            .map(|(name, minutes)| OwnedGame::from_minutes(0, name.to_string(), *minutes))
            .collect())
    }
    
    fn user(handle: &str, library: UserLibrary) -> UserResult {
        UserResult {
            handle: Handle::vanity(handle),
            library,
        }
    }
    
    #[test]
    fn formats_columns() {
        let report = CommonGamesReport {
            users: vec![
                user("a", games(&[("X", 125), ("Y", 0)])),
                user("b", games(&[("X", 60)])),
            ],
            common_games: vec![String::from("X")],
        };
        let table = GamesTable::from_report(&report);
        
        assert_eq!(table.columns, vec!["a", "b", "Common Games"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(0, "a"), Some("X (2 hrs)"));
        assert_eq!(table.cell(1, "a"), Some("Y (0 hrs)"));
        assert_eq!(table.cell(0, "b"), Some("X (1 hrs)"));
        assert_eq!(table.cell(1, "b"), None);
        assert_eq!(table.cell(0, COMMON_GAMES_COLUMN), Some("X (common)"));
        assert_eq!(table.cell(1, COMMON_GAMES_COLUMN), None);
    }
    
    #[test]
    fn row_count_is_largest_library() {
        let forty = (0..40).map(|i| (format!("Game {i}"), 0)).collect::<Vec<_>>();
        let forty = forty.iter().map(|(name, minutes)| (name.as_str(), *minutes)).collect::<Vec<_>>();
        let report = CommonGamesReport {
            users: vec![
                user("a", games(&forty)),
                user("b", games(&[("Game 1", 0)])),
                user("c", UserLibrary::Status(LibraryStatus::ProfileNotPublic)),
            ],
            common_games: Vec::new(),
        };
        let table = GamesTable::from_report(&report);
        
        assert_eq!(table.rows.len(), 40);
        assert!(table.rows.iter().all(|row| row.len() == 4));
        assert_eq!(table.cell(0, "c"), Some("Profile not public"));
        assert_eq!(table.cell(1, "c"), None);
    }
    
    #[test]
    fn all_statuses_fill_one_row() {
        let report = CommonGamesReport {
            users: vec![
                user("a", UserLibrary::Status(LibraryStatus::UnableToQuery)),
                user("b", UserLibrary::Status(LibraryStatus::NoGamesFound)),
            ],
            common_games: Vec::new(),
        };
        let table = GamesTable::from_report(&report);
        
        assert_eq!(table.rows, vec![vec![
            Some(String::from("Unable to query")),
            Some(String::from("No games found")),
            None,
        ]]);
    }
    
    #[test]
    fn no_users_has_one_blank_row() {
        let report = CommonGamesReport {
            users: Vec::new(),
            common_games: Vec::new(),
        };
        let table = GamesTable::from_report(&report);
        
        assert_eq!(table.columns, vec![COMMON_GAMES_COLUMN]);
        assert_eq!(table.rows, vec![vec![None]]);
    }
}
