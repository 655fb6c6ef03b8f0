//! Sub-slide splitting
//!
//! A slide's top-level content is cut into sub-slides at every level-1
//! heading and at every thematic break carrying the default attribute.
//! The boundary nodes themselves are consumed: a heading becomes the title
//! of the following sub-slide, a break keeps the current title.

use zetteldeck_ast::{Block, Inline};

use crate::slide::Slide;

/// What a top-level block means to the splitter
enum Boundary {
    /// Start a new sub-slide with this title
    Title(Vec<Inline>),
    /// Start a new sub-slide, keep the title
    Break,
}

fn boundary(block: &Block) -> Option<Boundary> {
    if let Some(heading) = block.as_level1_heading() {
        // A heading without text cannot title anything
        if heading.inlines.is_empty() {
            return None;
        }
        return Some(Boundary::Title(heading.inlines.clone()));
    }
    if block.is_slide_break() {
        return Some(Boundary::Break);
    }
    None
}

/// Split a slide into its non-empty chain of sub-slides.
///
/// Every sub-slide shares identifier, language and role of `slide`. A
/// boundary found before any content only sets the title of the first
/// sub-slide; content after the last boundary always forms a final
/// sub-slide, even when empty.
pub fn split_slide(slide: &Slide) -> Vec<Slide> {
    let mut result = Vec::new();
    let mut title = slide.title.clone();
    let mut content = Vec::new();

    for block in &slide.content {
        let Some(bound) = boundary(block) else {
            content.push(block.clone());
            continue;
        };
        let next_title = match bound {
            Boundary::Title(inlines) => Some(inlines),
            Boundary::Break => title.clone(),
        };
        if !result.is_empty() || !content.is_empty() {
            result.push(slide.make_child(title, std::mem::take(&mut content)));
        }
        title = next_title;
    }

    result.push(slide.make_child(title, content));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use zetteldeck_ast::{plain_text, Attributes, Zettel, ZettelId};

    fn slide_with(content: Vec<Block>) -> Slide {
        let zettel = Zettel::new(ZettelId::new(1).unwrap())
            .with_meta("title", "Deck")
            .with_content(content);
        Slide::from_zettel(zettel)
    }

    fn titles(parts: &[Slide]) -> Vec<String> {
        parts
            .iter()
            .map(|s| s.title.as_deref().map(plain_text).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_headings_and_breaks() {
        let p1 = Block::paragraph("one");
        let p2 = Block::paragraph("two");
        let p3 = Block::paragraph("three");
        let slide = slide_with(vec![
            Block::heading(1, "A"),
            p1.clone(),
            Block::slide_break(),
            p2.clone(),
            Block::heading(1, "B"),
            p3.clone(),
        ]);

        let parts = split_slide(&slide);
        assert_eq!(titles(&parts), vec!["A", "A", "B"]);
        assert_eq!(parts[0].content, vec![p1]);
        assert_eq!(parts[1].content, vec![p2]);
        assert_eq!(parts[2].content, vec![p3]);
    }

    #[test]
    fn test_no_boundary_keeps_whole_slide() {
        let content = vec![Block::paragraph("a"), Block::heading(2, "sub")];
        let slide = slide_with(content.clone());
        let parts = split_slide(&slide);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].content, content);
        assert_eq!(parts[0].title, slide.title);
    }

    #[test]
    fn test_empty_content() {
        let parts = split_slide(&slide_with(Vec::new()));
        assert_eq!(parts.len(), 1);
        assert!(parts[0].content.is_empty());
        assert_eq!(titles(&parts), vec!["Deck"]);
    }

    #[test]
    fn test_trailing_boundary_yields_empty_last_part() {
        let slide = slide_with(vec![Block::paragraph("a"), Block::heading(1, "End")]);
        let parts = split_slide(&slide);
        assert_eq!(titles(&parts), vec!["Deck", "End"]);
        assert!(parts[1].content.is_empty());
    }

    #[test]
    fn test_plain_thematic_break_is_content() {
        let rule = Block::ThematicBreak(Attributes::new());
        let slide = slide_with(vec![Block::paragraph("a"), rule.clone()]);
        let parts = split_slide(&slide);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].content.len(), 2);
        assert_eq!(parts[0].content[1], rule);
    }

    #[test]
    fn test_children_share_identity() {
        let mut slide = slide_with(vec![Block::paragraph("a"), Block::slide_break()]);
        slide.lang = "en".to_string();
        for part in split_slide(&slide) {
            assert_eq!(part.id, slide.id);
            assert_eq!(part.lang, "en");
        }
    }

    fn arb_block() -> impl Strategy<Value = Block> {
        prop_oneof![
            "[a-z]{1,8}".prop_map(|s| Block::paragraph(&s)),
            (1u8..4, "[A-Z][a-z]{0,6}").prop_map(|(level, s)| Block::heading(level, &s)),
            Just(Block::slide_break()),
            Just(Block::ThematicBreak(Attributes::new())),
        ]
    }

    proptest! {
        #[test]
        fn prop_split_is_complete(blocks in prop::collection::vec(arb_block(), 0..24)) {
            let slide = slide_with(blocks.clone());
            let parts = split_slide(&slide);
            prop_assert!(!parts.is_empty());

            let joined: Vec<Block> = parts.into_iter().flat_map(|p| p.content).collect();
            let expected: Vec<Block> = blocks
                .into_iter()
                .filter(|b| boundary(b).is_none())
                .collect();
            prop_assert_eq!(joined, expected);
        }

        #[test]
        fn prop_split_is_deterministic(blocks in prop::collection::vec(arb_block(), 0..24)) {
            let slide = slide_with(blocks);
            prop_assert_eq!(split_slide(&slide), split_slide(&slide));
        }
    }
}
