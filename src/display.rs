use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::table::Table;

/// Column-aligned rendering of a table, with each row's shortest
/// unambiguous path underlined:
///
/// ```text
/// they  them  their  theirs  themself
/// ╰──╯
/// ze    hir   hir    hirs    hirself
/// ╰───────╯
/// ```
pub struct TableDisplay<'a> {
    table: &'a Table,
    show_paths: bool,
}

impl<'a> TableDisplay<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            show_paths: true,
        }
    }

    /// Render rows only, without path markers.
    pub fn hide_paths(mut self) -> Self {
        self.show_paths = false;
        self
    }

    fn column_starts(&self) -> Vec<usize> {
        const SPACE_PADDING: usize = 2;
        let columns = self.table.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut starts = Vec::with_capacity(columns);
        let mut start = 0;
        for col in 0..columns {
            starts.push(start);
            let width = self
                .table
                .iter()
                .filter_map(|row| row.slug(col))
                .map(UnicodeWidthStr::width)
                .max()
                .unwrap_or(0);
            start += width + SPACE_PADDING;
        }
        starts
    }
}

impl<'a> fmt::Display for TableDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let starts = self.column_starts();
        let paths = self.table.abbreviations();

        for (idx, row) in self.table.iter().enumerate() {
            if idx > 0 {
                f.write_char('\n')?;
            }

            let mut line = String::new();
            for (col, slug) in row.slugs().iter().enumerate() {
                let pad = starts[col].saturating_sub(UnicodeWidthStr::width(&*line));
                line.extend(std::iter::repeat(' ').take(pad));
                line.push_str(slug);
            }
            f.write_str(&line)?;

            if !self.show_paths {
                continue;
            }

            let path_len = paths.get(idx).map_or(0, <[String]>::len);
            if path_len == 0 {
                continue;
            }
            let last = path_len - 1;
            let end = starts[last] + UnicodeWidthStr::width(row.slugs()[last].as_str());

            f.write_char('\n')?;
            f.write_char('╰')?;
            for _ in 1..end.saturating_sub(1) {
                f.write_char('─')?;
            }
            if end > 1 {
                f.write_char('╯')?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> Table {
        Table::from_slugs(vec![
            vec!["they", "them", "their", "theirs", "themself"],
            vec!["ze", "hir", "hir", "hirs", "hirself"],
            vec!["ze", "zir", "zir", "zirs", "zirself"],
        ])
        .unwrap()
    }

    #[test]
    fn test_paths_are_underlined() {
        let table = small_table();
        insta::assert_snapshot!(TableDisplay::new(&table), @r###"
        they  them  their  theirs  themself
        ╰──╯
        ze    hir   hir    hirs    hirself
        ╰───────╯
        ze    zir   zir    zirs    zirself
        ╰───────╯
        "###);
    }

    #[test]
    fn test_rows_only() {
        let table = small_table();
        insta::assert_snapshot!(TableDisplay::new(&table).hide_paths(), @r###"
        they  them  their  theirs  themself
        ze    hir   hir    hirs    hirself
        ze    zir   zir    zirs    zirself
        "###);
    }

    #[test]
    fn test_alias_columns_get_their_own_width() {
        let table = Table::from_slugs(vec![
            vec!["they", "them", "their", "theirs", "themself", "themselves"],
            vec!["e", "em", "eir", "eirs", "emself"],
        ])
        .unwrap();
        insta::assert_snapshot!(TableDisplay::new(&table), @r###"
        they  them  their  theirs  themself  themselves
        ╰──╯
        e     em    eir    eirs    emself
        ╰
        "###);
    }
}
