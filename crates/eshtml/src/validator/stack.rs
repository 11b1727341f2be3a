//! Stack of open tags used by the structural check.

/// Entry in the stack of open tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct OpenTag {
    pub(crate) normalized: String,
    /// Name as written, for messages.
    pub(crate) original: String,
}

impl OpenTag {
    pub(crate) fn new(original: &str, normalized: &str) -> Self {
        Self {
            normalized: normalized.to_string(),
            original: original.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CloseOutcome {
    Matched,
    /// The closing tag did not match; `top` is the frame that was blamed, if any.
    Mismatched { top: Option<OpenTag> },
}

/// Open tags in document order, bottom to top.
#[derive(Clone, Debug, Default)]
pub(crate) struct OpenTagStack {
    items: Vec<OpenTag>,
    max_depth: usize,
}

impl OpenTagStack {
    pub(crate) fn push(&mut self, entry: OpenTag) {
        self.items.push(entry);
        self.max_depth = self.max_depth.max(self.items.len());
    }

    pub(crate) fn pop(&mut self) -> Option<OpenTag> {
        self.items.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub(crate) fn iter_original(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|entry| entry.original.as_str())
    }

    /// Greedy close recovery.
    ///
    /// Pops frames from the top, discarding void frames, until the first non-void frame;
    /// that frame is consumed whether or not it matches. A closing tag therefore blames
    /// exactly one frame, and an unmatched outer frame stays on the stack to be reported
    /// as unclosed.
    pub(crate) fn close_greedy(
        &mut self,
        normalized: &str,
        is_void: impl Fn(&str) -> bool,
    ) -> CloseOutcome {
        let top = loop {
            match self.pop() {
                Some(frame) if is_void(&frame.normalized) => continue,
                other => break other,
            }
        };
        match top {
            Some(frame) if frame.normalized == normalized => CloseOutcome::Matched,
            top => CloseOutcome::Mismatched { top },
        }
    }
}
