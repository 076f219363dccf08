use catena::{CommentaryView, RunMetrics, VerseGroup};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_chapter(book: &str, chapter: u32, groups: &[VerseGroup], metrics: &RunMetrics, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Chapter: {book} {chapter}"), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Groups ━━━", ansi::GRAY));
    if groups.is_empty() {
        println!("{}", palette.dim("  No commentary groups produced"));
    }
    for (idx, group) in groups.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(format!("verses {}", group.verse_range), ansi::GREEN)),
            palette.dim("│"),
            palette.paint(
                format!("group {}", group.group_id.as_deref().unwrap_or("default")),
                ansi::YELLOW
            ),
        );

        for entry in &group.verses {
            match (&entry.verse, &entry.version) {
                (Some(text), version) => println!(
                    "      {} {} {}",
                    palette.paint(format!("v{}", entry.verse_number), ansi::BLUE),
                    palette.dim(format!("({})", version.as_deref().unwrap_or("?"))),
                    clip(text, 60),
                ),
                (None, _) => println!(
                    "      {} {}",
                    palette.paint(format!("v{}", entry.verse_number), ansi::BLUE),
                    palette.dim("no text available"),
                ),
            }
        }

        for commentary in &group.commentaries {
            print_commentary(commentary, &palette);
        }
    }

    print_timing(metrics, &palette);
}

pub fn print_verse(verse: u32, views: &[CommentaryView], metrics: &RunMetrics, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Verse: {verse}"), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Commentaries ━━━", ansi::GRAY));
    if views.is_empty() {
        println!("{}", palette.dim("  No commentary addresses this verse"));
    }
    for view in views {
        print_commentary(view, &palette);
        if let Some(preview) = &view.preview {
            println!("      {} {}", palette.dim("preview:"), preview);
        }
    }

    print_timing(metrics, &palette);
}

fn print_commentary(view: &CommentaryView, palette: &ansi::Palette) {
    println!(
        "    {} {} {}",
        palette.paint(&view.author.name, ansi::CYAN),
        palette.dim("│"),
        palette.dim(format!("{} excerpts, {}", view.excerpts.len(), view.source)),
    );
}

fn print_timing(metrics: &RunMetrics, palette: &ansi::Palette) {
    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Reconcile: {}  │  Group: {}  │  Resolve: {}",
        palette.paint(format!("{:?}", metrics.total), ansi::GREEN),
        palette.paint(format!("{:?}", metrics.reconcile), ansi::CYAN),
        palette.dim(format!("{:?}", metrics.group)),
        palette.dim(format!("{:?}", metrics.resolve)),
    );
    println!();
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max { s.to_string() } else { s.chars().take(max).chain(std::iter::once('…')).collect() }
}
