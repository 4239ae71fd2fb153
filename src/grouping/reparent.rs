use crate::host::SceneHost;

/// Collection moves performed before parenting when full parenting is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReparentingPlan<O, C> {
    /// Collection the group node itself is moved into.
    pub group_collection: C,
    /// Each child with the collection it ends up in, in selection order.
    pub moves: Vec<(O, C)>,
}

/// The collection holding most of `children`. Ties go to the collection seen
/// first, walking children in order and each child's memberships in host order.
/// Falls back to the root collection when no child belongs anywhere.
pub fn target_collection<H: SceneHost>(host: &H, children: &[H::Object]) -> H::Collection {
    let mut votes: Vec<(H::Collection, usize)> = Vec::new();

    for &child in children {
        for collection in host.collections_of(child) {
            match votes.iter_mut().find(|(c, _)| *c == collection) {
                Some((_, count)) => *count += 1,
                None => votes.push((collection, 1)),
            }
        }
    }

    let mut winner: Option<(H::Collection, usize)> = None;
    for (collection, count) in votes {
        if winner.map_or(true, |(_, best)| count > best) {
            winner = Some((collection, count));
        }
    }

    winner
        .map(|(collection, _)| collection)
        .unwrap_or_else(|| host.root_collection())
}

pub fn plan_reparenting<H: SceneHost>(
    host: &H,
    children: &[H::Object],
) -> ReparentingPlan<H::Object, H::Collection> {
    let target = target_collection(host, children);

    ReparentingPlan {
        group_collection: target,
        moves: children.iter().map(|&child| (child, target)).collect(),
    }
}

/// Moves everything into the planned collections (if any), then parents the
/// children to `group` keeping their world transforms. `group` is never
/// parented to itself even if it shows up in `children`.
pub fn apply_reparenting<H: SceneHost>(
    host: &mut H,
    group: H::Object,
    children: &[H::Object],
    plan: Option<&ReparentingPlan<H::Object, H::Collection>>,
) -> Vec<H::Object> {
    let children: Vec<H::Object> = children
        .iter()
        .copied()
        .filter(|&child| child != group)
        .collect();

    if let Some(plan) = plan {
        move_to_collection(host, group, plan.group_collection);
        for &(child, collection) in plan.moves.iter().filter(|(child, _)| *child != group) {
            move_to_collection(host, child, collection);
        }
    }

    host.set_parent_keep_transform(&children, group);

    children
}

fn move_to_collection<H: SceneHost>(host: &mut H, object: H::Object, target: H::Collection) {
    for collection in host.collections_of(object) {
        host.unlink(collection, object);
    }
    host.link(target, object);
}
