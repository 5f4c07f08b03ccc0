use serde::Serialize;

/// The element kind assigned to a screenplay line.
///
/// The set is closed. Group membership (character-like, dialogue-like, ...)
/// is answered by the predicate methods rather than stored on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    Empty,
    /// `# Act One`
    Section,
    /// `= what happens here`
    Synopsis,
    TitlePageTitle,
    TitlePageAuthor,
    TitlePageCredit,
    TitlePageSource,
    TitlePageContact,
    TitlePageDraftDate,
    /// Whitelisted title page key without a dedicated kind (notes, copyright).
    TitlePageUnknown,
    Heading,
    Action,
    Character,
    Parenthetical,
    Dialogue,
    DualDialogueCharacter,
    DualDialogueParenthetical,
    DualDialogue,
    Transition,
    Lyrics,
    PageBreak,
    Centered,
    Shot,
    /// Export-only: "(MORE)" inserted when dialogue breaks across pages.
    More,
    /// Export-only: dual dialogue counterpart of [`LineKind::More`].
    DualMore,
}

impl LineKind {
    pub fn is_character(self) -> bool {
        matches!(self, LineKind::Character | LineKind::DualDialogueCharacter)
    }

    pub fn is_dialogue(self) -> bool {
        matches!(self, LineKind::Dialogue | LineKind::DualDialogue)
    }

    pub fn is_parenthetical(self) -> bool {
        matches!(
            self,
            LineKind::Parenthetical | LineKind::DualDialogueParenthetical
        )
    }

    /// Any line that belongs to a dialogue block: cue, parenthetical or speech.
    pub fn is_dialogue_block(self) -> bool {
        self.is_character() || self.is_dialogue() || self.is_parenthetical()
    }

    pub fn is_title_page(self) -> bool {
        matches!(
            self,
            LineKind::TitlePageTitle
                | LineKind::TitlePageAuthor
                | LineKind::TitlePageCredit
                | LineKind::TitlePageSource
                | LineKind::TitlePageContact
                | LineKind::TitlePageDraftDate
                | LineKind::TitlePageUnknown
        )
    }

    /// Headings, sections and synopses make up the document outline.
    pub fn is_outline(self) -> bool {
        matches!(
            self,
            LineKind::Heading | LineKind::Section | LineKind::Synopsis
        )
    }

    pub fn is_non_printing(self) -> bool {
        matches!(
            self,
            LineKind::Section | LineKind::Synopsis | LineKind::Empty
        )
    }

    pub fn is_dual(self) -> bool {
        matches!(
            self,
            LineKind::DualDialogueCharacter
                | LineKind::DualDialogueParenthetical
                | LineKind::DualDialogue
                | LineKind::DualMore
        )
    }

    /// Kinds that only exist in paginated export output. The classifier
    /// never produces them.
    pub fn is_export_only(self) -> bool {
        matches!(self, LineKind::More | LineKind::DualMore)
    }

    /// Maps a whitelisted, lowercased title page key to its kind.
    pub fn for_title_key(key: &str) -> Option<LineKind> {
        let kind = match key {
            "title" => LineKind::TitlePageTitle,
            "author" | "authors" => LineKind::TitlePageAuthor,
            "credit" => LineKind::TitlePageCredit,
            "source" => LineKind::TitlePageSource,
            "contact" => LineKind::TitlePageContact,
            "draft date" | "date" => LineKind::TitlePageDraftDate,
            "notes" | "copyright" => LineKind::TitlePageUnknown,
            _ => return None,
        };
        Some(kind)
    }
}
