//! Numbered slide chains
//!
//! A [`SlideChain`] is an arena of [`SlideInfo`] nodes. Top-level nodes are
//! linked through `prev`/`next` and each may own a chain of sub-slides,
//! reachable via `child` and `last_child`. Nodes are addressed by
//! [`SlideIdx`] and never change once the chain has been numbered.

use std::ops::Index;
use std::rc::Rc;

use zetteldeck_ast::ZettelId;

use crate::slide::Slide;
use crate::split::split_slide;

/// Handle of a node inside one [`SlideChain`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideIdx(usize);

/// One slide occurrence within a chain
#[derive(Debug, Clone)]
pub struct SlideInfo {
    pub slide: Rc<Slide>,
    /// Position in the rendered document
    pub number: usize,
    /// Number in the slide show, `0` if not shown
    pub slide_no: usize,
    prev: Option<SlideIdx>,
    next: Option<SlideIdx>,
    child: Option<SlideIdx>,
    last_child: Option<SlideIdx>,
}

impl SlideInfo {
    fn new(slide: Rc<Slide>) -> Self {
        Self {
            slide,
            number: 0,
            slide_no: 0,
            prev: None,
            next: None,
            child: None,
            last_child: None,
        }
    }
}

/// Arena holding a linear stream of slides and their sub-slides
#[derive(Debug, Clone, Default)]
pub struct SlideChain {
    infos: Vec<SlideInfo>,
    first: Option<SlideIdx>,
    last: Option<SlideIdx>,
}

impl SlideChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// First top-level node
    pub fn first(&self) -> Option<SlideIdx> {
        self.first
    }

    pub fn get(&self, idx: SlideIdx) -> Option<&SlideInfo> {
        self.infos.get(idx.0)
    }

    pub fn next(&self, idx: SlideIdx) -> Option<SlideIdx> {
        self.get(idx).and_then(|info| info.next)
    }

    pub fn prev(&self, idx: SlideIdx) -> Option<SlideIdx> {
        self.get(idx).and_then(|info| info.prev)
    }

    /// First sub-slide
    pub fn child(&self, idx: SlideIdx) -> Option<SlideIdx> {
        self.get(idx).and_then(|info| info.child)
    }

    /// Last sub-slide
    pub fn last_child(&self, idx: SlideIdx) -> Option<SlideIdx> {
        self.get(idx).and_then(|info| info.last_child)
    }

    /// Top-level nodes in order
    pub fn iter(&self) -> Siblings<'_> {
        Siblings {
            chain: self,
            cur: self.first,
        }
    }

    /// Sub-slides of a node in order
    pub fn children(&self, idx: SlideIdx) -> Siblings<'_> {
        Siblings {
            chain: self,
            cur: self.child(idx),
        }
    }

    /// Number of top-level nodes
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Find the occurrence of a zettel nearest to `from`.
    ///
    /// Searches backward from `from` (inclusive) first, then forward. The
    /// invalid identifier is never found.
    pub fn find(&self, from: SlideIdx, id: ZettelId) -> Option<SlideIdx> {
        if !id.is_valid() {
            return None;
        }
        let mut cur = Some(from);
        while let Some(idx) = cur {
            if self[idx].slide.id == id {
                return Some(idx);
            }
            cur = self.prev(idx);
        }
        let mut cur = self.next(from);
        while let Some(idx) = cur {
            if self[idx].slide.id == id {
                return Some(idx);
            }
            cur = self.next(idx);
        }
        None
    }

    fn alloc(&mut self, info: SlideInfo) -> SlideIdx {
        let idx = SlideIdx(self.infos.len());
        self.infos.push(info);
        idx
    }

    /// Append a top-level node
    pub(crate) fn push(&mut self, slide: Rc<Slide>) -> SlideIdx {
        let mut info = SlideInfo::new(slide);
        info.prev = self.last;
        let idx = self.alloc(info);
        match self.last {
            Some(last) => self.infos[last.0].next = Some(idx),
            None => self.first = Some(idx),
        }
        self.last = Some(idx);
        idx
    }

    /// Split the slide of `parent` and attach the parts as its sub-slides.
    ///
    /// Returns the number of parts.
    pub(crate) fn split_children(&mut self, parent: SlideIdx) -> usize {
        let parts = split_slide(&self.infos[parent.0].slide);
        let count = parts.len();
        let mut prev: Option<SlideIdx> = None;
        for part in parts {
            let mut info = SlideInfo::new(Rc::new(part));
            info.prev = prev;
            let idx = self.alloc(info);
            match prev {
                Some(p) => self.infos[p.0].next = Some(idx),
                None => self.infos[parent.0].child = Some(idx),
            }
            prev = Some(idx);
        }
        self.infos[parent.0].last_child = prev;
        count
    }

    pub(crate) fn set_numbers(&mut self, idx: SlideIdx, number: usize, slide_no: usize) {
        let info = &mut self.infos[idx.0];
        info.number = number;
        info.slide_no = slide_no;
    }
}

impl Index<SlideIdx> for SlideChain {
    type Output = SlideInfo;

    fn index(&self, idx: SlideIdx) -> &SlideInfo {
        &self.infos[idx.0]
    }
}

/// Iterator over one level of a chain
#[derive(Debug, Clone)]
pub struct Siblings<'a> {
    chain: &'a SlideChain,
    cur: Option<SlideIdx>,
}

impl Iterator for Siblings<'_> {
    type Item = SlideIdx;

    fn next(&mut self) -> Option<SlideIdx> {
        let idx = self.cur?;
        self.cur = self.chain.next(idx);
        Some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zetteldeck_ast::{Block, Zettel};

    fn slide(n: u64, content: Vec<Block>) -> Rc<Slide> {
        Rc::new(Slide::from_zettel(
            Zettel::new(ZettelId::new(n).unwrap()).with_content(content),
        ))
    }

    fn zid(n: u64) -> ZettelId {
        ZettelId::new(n).unwrap()
    }

    #[test]
    fn test_push_links_siblings() {
        let mut chain = SlideChain::new();
        let a = chain.push(slide(1, Vec::new()));
        let b = chain.push(slide(2, Vec::new()));
        assert_eq!(chain.first(), Some(a));
        assert_eq!(chain.next(a), Some(b));
        assert_eq!(chain.prev(b), Some(a));
        assert_eq!(chain.next(b), None);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_split_children() {
        let mut chain = SlideChain::new();
        let a = chain.push(slide(
            1,
            vec![
                Block::paragraph("x"),
                Block::slide_break(),
                Block::paragraph("y"),
            ],
        ));
        assert_eq!(chain.split_children(a), 2);
        let kids: Vec<_> = chain.children(a).collect();
        assert_eq!(kids.len(), 2);
        assert_eq!(chain.child(a), Some(kids[0]));
        assert_eq!(chain.last_child(a), Some(kids[1]));
        assert_eq!(chain.prev(kids[0]), None);
        // Sub-slides are not part of the top-level stream
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_find_prefers_backward() {
        let mut chain = SlideChain::new();
        let first_x = chain.push(slide(1, Vec::new()));
        let y = chain.push(slide(2, Vec::new()));
        let second_x = chain.push(slide(1, Vec::new()));

        assert_eq!(chain.find(second_x, zid(1)), Some(second_x));
        assert_eq!(chain.find(y, zid(1)), Some(first_x));
        assert_eq!(chain.find(first_x, zid(2)), Some(y));
        assert_eq!(chain.find(first_x, zid(3)), None);
        assert_eq!(chain.find(first_x, ZettelId::INVALID), None);
    }
}
