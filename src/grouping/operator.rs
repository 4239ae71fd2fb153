use itertools::Itertools;

use crate::grouping::config::{GroupConfiguration, PivotMode};
use crate::grouping::error::{GroupError, GroupResult};
use crate::grouping::pivot::{resolve_pivot, PivotTransform};
use crate::grouping::reparent::{apply_reparenting, plan_reparenting};
use crate::grouping::report::ReportMessage;
use crate::host::SceneHost;

/// Outcome of a successful grouping run.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupReport<O> {
    pub group: O,
    /// Final name of the group node, which may carry a numeric suffix.
    pub group_name: String,
    pub transform: PivotTransform,
    pub mode: PivotMode,
    pub reparented: Vec<O>,
    pub messages: Vec<ReportMessage>,
}

/// The selection the command operates on: deduplicated, hidden objects
/// dropped unless `include_hidden` is set.
pub fn gather_selection<H: SceneHost>(host: &H, config: &GroupConfiguration) -> Vec<H::Object> {
    host.selected_objects()
        .into_iter()
        .unique()
        .filter(|&object| config.include_hidden || !host.is_hidden(object))
        .collect()
}

/// Creates an empty at the resolved pivot and parents the selection to it
/// keeping world transforms. On error the scene is left untouched.
pub fn make_group_parent<H: SceneHost>(
    host: &mut H,
    config: &GroupConfiguration,
) -> GroupResult<GroupReport<H::Object>> {
    let selection = gather_selection(&*host, config);

    if selection.is_empty() {
        log::warn!("{}", GroupError::EmptySelection);
        return Err(GroupError::EmptySelection);
    }

    let active = host.active_object();
    let resolution = resolve_pivot(&*host, &selection, config, active).inspect_err(|error| {
        log::warn!("{}", error);
    })?;

    let mut messages = Vec::new();
    if let Some(downgrade) = resolution.downgrade {
        messages.push(ReportMessage::info(downgrade.message()));
    }

    // Everything above is read-only; the scene changes from here on.
    let group = host.create_empty(&config.group_name, &resolution.transform);
    let children: Vec<H::Object> = selection
        .into_iter()
        .filter(|&object| object != group)
        .collect();

    let plan = config
        .full_parenting
        .then(|| plan_reparenting(&*host, &children));
    let reparented = apply_reparenting(host, group, &children, plan.as_ref());

    host.set_selection(&[group], Some(group));

    let group_name = host.object_name(group);
    let success = ReportMessage::info(format!(
        "Created group '{}' and parented {} objects.",
        group_name,
        reparented.len()
    ));
    success.log();
    messages.push(success);

    Ok(GroupReport {
        group,
        group_name,
        transform: resolution.transform,
        mode: resolution.mode,
        reparented,
        messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::report::ReportLevel;
    use crate::math::AABB;
    use crate::scene_graph::{Object3D, ObjectKind, Scene, Transform};
    use glam::Vec3;

    fn cube(name: &str, translation: Vec3) -> Object3D {
        Object3D::new(name, ObjectKind::Mesh)
            .with_transform(Transform::from_translation(translation))
            .with_bounds(AABB::new(Vec3::splat(-0.5), Vec3::splat(0.5)))
    }

    #[test]
    fn empty_selection_leaves_scene_untouched() {
        let mut scene = Scene::new();
        scene.add_object(cube("A", Vec3::ZERO));

        let result = make_group_parent(&mut scene, &GroupConfiguration::default());

        assert_eq!(result.unwrap_err(), GroupError::EmptySelection);
        assert_eq!(scene.objects.len(), 1);
    }

    #[test]
    fn hidden_objects_are_filtered_when_excluded() {
        let mut scene = Scene::new();
        let a = scene.add_object(cube("A", Vec3::ZERO));
        let hidden = scene.add_object(cube("Hidden", Vec3::X * 100.0).hidden(true));
        scene.select(&[a, hidden], None);

        let config = GroupConfiguration {
            include_hidden: false,
            ..Default::default()
        };
        let selection = gather_selection(&scene, &config);
        assert_eq!(selection, vec![a]);

        let report = make_group_parent(&mut scene, &config).unwrap();
        assert_eq!(report.reparented, vec![a]);
        assert!(report.transform.location.abs_diff_eq(Vec3::ZERO, 1e-6));
        assert_eq!(scene.get_object(hidden).unwrap().parent_id, None);
    }

    #[test]
    fn only_hidden_selection_is_empty_when_excluded() {
        let mut scene = Scene::new();
        let hidden = scene.add_object(cube("Hidden", Vec3::ZERO).hidden(true));
        scene.select(&[hidden], Some(hidden));

        let config = GroupConfiguration {
            include_hidden: false,
            ..Default::default()
        };
        assert_eq!(
            make_group_parent(&mut scene, &config).unwrap_err(),
            GroupError::EmptySelection
        );
        assert_eq!(scene.objects.len(), 1);
    }

    #[test]
    fn group_becomes_only_selection_and_active() {
        let mut scene = Scene::new();
        let a = scene.add_object(cube("A", Vec3::ZERO));
        let b = scene.add_object(cube("B", Vec3::ONE));
        scene.select(&[a, b], Some(a));

        let report = make_group_parent(&mut scene, &GroupConfiguration::default()).unwrap();

        assert_eq!(scene.selection(), &[report.group]);
        assert_eq!(scene.active(), Some(report.group));
        assert_eq!(report.group_name, "Group");
        assert_eq!(
            scene.get_object(report.group).unwrap().kind,
            ObjectKind::Empty(crate::scene_graph::EmptyDisplay::PlainAxes)
        );
    }

    #[test]
    fn messages_report_downgrade_then_success() {
        let mut scene = Scene::new();
        let a = scene.add_object(cube("A", Vec3::ZERO));
        scene.select(&[a], None);

        let config = GroupConfiguration {
            pivot_mode: PivotMode::ActiveObject,
            ..Default::default()
        };
        let report = make_group_parent(&mut scene, &config).unwrap();

        assert_eq!(report.mode, PivotMode::BoundsCenter);
        assert_eq!(report.messages.len(), 2);
        assert!(report.messages.iter().all(|m| m.level == ReportLevel::Info));
        assert!(report.messages[0].text.contains("Bounds Center"));
        assert_eq!(
            report.messages[1].text,
            "Created group 'Group' and parented 1 objects."
        );
    }

    #[test]
    fn second_group_gets_unique_name() {
        let mut scene = Scene::new();
        let a = scene.add_object(cube("A", Vec3::ZERO));
        scene.select(&[a], None);
        make_group_parent(&mut scene, &GroupConfiguration::default()).unwrap();

        let b = scene.add_object(cube("B", Vec3::ZERO));
        scene.select(&[b], None);
        let report = make_group_parent(&mut scene, &GroupConfiguration::default()).unwrap();

        assert_eq!(report.group_name, "Group.001");
    }
}
