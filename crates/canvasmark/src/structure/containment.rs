//! Geometric predicates and selection rules of the resolver.
//!
//! All choices are made by scanning groups in document order and replacing
//! the current pick only on a strictly better candidate, so equal-area ties
//! always resolve to the earliest group.

use std::cmp::Ordering;

use canvasmark_core::element::Element;

/// Returns `true` if `outer` encloses `inner` for the purpose of nesting
/// groups.
///
/// This is origin containment, with one refinement: groups sharing the same
/// origin contain each other's origin, so between them the larger group (then
/// the earlier one) is taken as the outer one. This keeps the relation
/// acyclic; for distinct origins it is plain origin containment.
pub fn encloses(outer: &Element, inner: &Element) -> bool {
    if outer.id() == inner.id() || !inner.is_inside(outer) {
        return false;
    }
    if outer.bounds().origin() != inner.bounds().origin() {
        return true;
    }
    nesting_rank(outer, inner) == Ordering::Less
}

/// Orders two groups at the same origin: larger area first, then document order.
fn nesting_rank(a: &Element, b: &Element) -> Ordering {
    b.bounds()
        .area()
        .cmp(&a.bounds().area())
        .then(a.order().cmp(&b.order()))
}

/// Returns the canonical direct parent of `child` among `groups`.
///
/// A group `g` enclosing `child` is a direct parent when no other group sits
/// between them, i.e. no `m` with `g` enclosing `m` and `m` enclosing
/// `child`. Among direct parents the smallest by area wins, ties going to the
/// earliest in `groups`.
pub fn direct_parent<'a>(child: &Element, groups: &[&'a Element]) -> Option<&'a Element> {
    let enclosing: Vec<&Element> = groups
        .iter()
        .copied()
        .filter(|group| encloses(group, child))
        .collect();

    let direct = enclosing.iter().copied().filter(|&group| {
        !enclosing
            .iter()
            .any(|&middle| middle.id() != group.id() && encloses(group, middle))
    });

    smallest(direct)
}

/// Returns the smallest-area group among `groups` containing `element`'s
/// origin, ties going to the earliest.
pub fn deepest_group<'a>(element: &Element, groups: &[&'a Element]) -> Option<&'a Element> {
    smallest(
        groups
            .iter()
            .copied()
            .filter(|group| group.id() != element.id() && element.is_inside(group)),
    )
}

/// First element of minimal area; later elements replace it only when strictly smaller.
fn smallest<'a>(groups: impl Iterator<Item = &'a Element>) -> Option<&'a Element> {
    groups.fold(None::<&'a Element>, |best, group| match best {
        Some(current) if current.bounds().area() <= group.bounds().area() => Some(current),
        _ => Some(group),
    })
}
