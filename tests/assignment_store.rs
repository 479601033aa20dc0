use std::sync::Arc;

use course_dashboard::errors::DashboardError;
use course_dashboard::models::courses::entities::Difficulty;
use course_dashboard::models::courses::requests::CreateCourseRequest;
use course_dashboard::services::AssignmentStore;
use course_dashboard::storage::{MemoryStorage, Storage};
use course_dashboard::utils::CourseLimits;

fn setup() -> (Arc<MemoryStorage>, AssignmentStore) {
    let storage = Arc::new(MemoryStorage::with_builtin_fixtures().unwrap());
    let store = AssignmentStore::new(storage.clone(), CourseLimits::default());
    (storage, store)
}

#[tokio::test]
async fn assign_adds_each_unassigned_pair_exactly_once() {
    let (storage, mut store) = setup();
    let classes = storage.list_classes(Default::default()).await.unwrap();
    let courses = storage.list_courses(Default::default()).await.unwrap();

    for class in &classes {
        for course in &courses {
            if class.has_course(course.id) {
                continue;
            }
            let updated = store.assign(class.id(), course.id).await.unwrap();
            assert_eq!(updated.iter().filter(|id| **id == course.id).count(), 1);

            let detail = store.get_class_detail(class.id()).await.unwrap();
            assert!(detail.class.has_course(course.id));
            assert_eq!(
                detail.courses.iter().filter(|c| c.id == course.id).count(),
                1
            );
        }
    }
}

#[tokio::test]
async fn assign_unassign_round_trip_for_every_pair() {
    let (storage, mut store) = setup();
    let classes = storage.list_classes(Default::default()).await.unwrap();
    let courses = storage.list_courses(Default::default()).await.unwrap();

    for class in &classes {
        for course in courses.iter().filter(|c| !class.has_course(c.id)) {
            store.assign(class.id(), course.id).await.unwrap();
            let restored = store.unassign(class.id(), course.id).await.unwrap();
            assert_eq!(restored, class.course_ids);
        }
    }
}

#[tokio::test]
async fn classes_for_teacher_only_contain_their_classes() {
    let (storage, mut store) = setup();
    for user in storage.list_users().await.unwrap() {
        let classes = store.list_classes_for_teacher(user.id).await.unwrap();
        assert!(classes.iter().all(|c| c.teacher_id() == user.id));
    }
    assert!(store.list_classes_for_teacher(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn teacher_assignment_scenario() {
    let (storage, mut store) = setup();

    let ids: Vec<i64> = store
        .list_classes_for_teacher(1)
        .await
        .unwrap()
        .iter()
        .map(|c| c.id())
        .collect();
    assert_eq!(ids, vec![1, 2]);
    let course = storage.get_course_by_id(5).await.unwrap().unwrap();
    assert_eq!(course.teacher_id, 1);

    let courses = store.assign(1, 5).await.unwrap();
    assert!(courses.contains(&5));

    let err = store.assign(1, 5).await.unwrap_err();
    assert!(matches!(err, DashboardError::DuplicateAssignment(_)));
    let class = storage.get_class_by_id(1).await.unwrap().unwrap();
    assert_eq!(class.course_ids.len(), courses.len());

    let courses = store.unassign(1, 5).await.unwrap();
    assert!(!courses.contains(&5));
    let class = storage.get_class_by_id(1).await.unwrap().unwrap();
    assert!(!class.has_course(5));
}

#[tokio::test]
async fn over_long_title_is_rejected_without_side_effects() {
    let (storage, mut store) = setup();
    let teacher = storage.get_user_by_id(1).await.unwrap().unwrap();
    let before = storage.list_courses(Default::default()).await.unwrap().len();

    let req = CreateCourseRequest {
        teacher_id: Some(1),
        title: "T".repeat(store.limits().max_title_length + 1),
        description: String::new(),
        date: chrono::NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
        total_marks: 50,
        difficulty: Difficulty::Easy,
    };
    let err = store.create_course(&teacher, req).await.unwrap_err();
    assert!(matches!(err, DashboardError::Validation(_)));

    let after = storage.list_courses(Default::default()).await.unwrap().len();
    assert_eq!(before, after);
}

#[tokio::test]
async fn storage_reset_isolates_sessions() {
    let (storage, mut store) = setup();
    store.assign(1, 5).await.unwrap();

    storage.reset();
    store.reset();

    store.assign(1, 5).await.unwrap();
}
