use super::menu::{MenuKind, MenuNode};

/// Songs of the most recently opened listing + the playing position 🎶
#[derive(Debug, Clone, Default)]
pub struct PlaybackQueue {
    items: Vec<MenuNode>,
    current: Option<usize>,
}

impl PlaybackQueue {
    /// Queue every song-kind entry of `listing`, positioned on the entry at
    /// `selected`. Returns an empty queue if that entry is not a song.
    pub fn from_listing(listing: &[MenuNode], selected: usize) -> Self {
        let mut items = Vec::new();
        let mut current = None;
        for (idx, node) in listing.iter().enumerate() {
            if node.kind != MenuKind::Song {
                continue;
            }
            if idx == selected {
                current = Some(items.len());
            }
            items.push(node.clone());
        }

        match current {
            Some(_) => Self { items, current },
            None => Self::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[MenuNode] {
        &self.items
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&MenuNode> {
        self.current.and_then(|i| self.items.get(i))
    }

    /// Advance with wraparound. Returns the new item.
    pub fn next(&mut self) -> Option<&MenuNode> {
        if self.items.is_empty() {
            return None;
        }
        let len = self.items.len();
        let next = match self.current {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.current = Some(next);
        self.items.get(next)
    }

    /// Step back with wraparound. Returns the new item.
    pub fn prev(&mut self) -> Option<&MenuNode> {
        if self.items.is_empty() {
            return None;
        }
        let len = self.items.len();
        let prev = match self.current {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.current = Some(prev);
        self.items.get(prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<MenuNode> {
        vec![
            MenuNode::song("A", "a", None),
            MenuNode::menu("Folder", Vec::new()),
            MenuNode::song("B", "b", None),
            MenuNode::song("C", "c", None),
        ]
    }

    #[test]
    fn test_queue_filters_songs_and_points_at_selection() {
        let q = PlaybackQueue::from_listing(&listing(), 2);
        let labels: Vec<&str> = q.items().iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(q.current_index(), Some(1));
    }

    #[test]
    fn test_queue_wraps() {
        let mut q = PlaybackQueue::from_listing(&listing(), 3);
        assert_eq!(q.current_index(), Some(2));
        q.next();
        assert_eq!(q.current_index(), Some(0));
        q.prev();
        assert_eq!(q.current_index(), Some(2));
    }

    #[test]
    fn test_empty_queue_ignores_steps() {
        let mut q = PlaybackQueue::default();
        assert!(q.next().is_none());
        assert!(q.prev().is_none());
        assert_eq!(q.current_index(), None);
    }

    #[test]
    fn test_non_song_selection_builds_nothing() {
        let q = PlaybackQueue::from_listing(&listing(), 1);
        assert!(q.is_empty());
    }
}
