use std::{alloc::{Layout, LayoutError}, error, fmt};


/// Reasons a capacity request could not be satisfied.
///
/// Returned by [`try_reserve`](crate::SpillVec::try_reserve). The infallible
/// growth paths translate `Overflow` and `Layout` into panics and `Alloc`
/// into [`std::alloc::handle_alloc_error`].
#[derive(Debug, Clone)]
pub enum AllocErr {
    Overflow,
    Layout,
    Alloc { layout: Layout }
}

impl AllocErr {
    #[inline]
    pub(crate) const fn layout(_err: LayoutError) -> Self { Self::Layout }

    #[inline]
    pub(crate) const fn alloc(layout: Layout) -> Self { Self::Alloc { layout } }
}

impl fmt::Display for AllocErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => write!(f, "capacity overflow"),
            Self::Layout => write!(f, "invalid layout for requested capacity"),
            Self::Alloc { layout } => write!(f, "allocation of {} bytes failed", layout.size()),
        }
    }
}

impl error::Error for AllocErr {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(AllocErr::Overflow.to_string(), "capacity overflow");

        let layout = Layout::array::<u64>(4).unwrap();
        assert_eq!(AllocErr::alloc(layout).to_string(), "allocation of 32 bytes failed");
    }
}
