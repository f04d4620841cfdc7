//! PostgreSQL store tests
//!
//! These start a PostgreSQL container and are ignored by default; run them
//! with `cargo test -p infra_db -- --ignored` on a machine with Docker.

use std::sync::Arc;

use core_kernel::{KeyFilter, Repository, Store, TimestampPolicy};
use domain_company::{Company, CompanyService};
use domain_employee::Employee;
use infra_db::{PostgresCompanyStore, PostgresEmployeeStore};
use test_utils::{
    assert_not_found, assert_single_with_key, assert_stamped, assert_store_failure, db_test,
    fake_company, CompanyFixtures, EmployeeFixtures, TemporalFixtures, TestEmployeeBuilder,
};

db_test!(test_company_crud_round_trip, |pool| {
    let store = PostgresCompanyStore::new(pool);

    assert!(store.insert(CompanyFixtures::acme()).await.unwrap());
    assert!(store.insert(CompanyFixtures::acme_south()).await.unwrap());

    let by_code = store.find(&KeyFilter::by_code("C1")).await.unwrap();
    assert_eq!(by_code.len(), 2);

    let renamed = Company {
        company_name: Some("Acme Corp".to_string()),
        ..CompanyFixtures::acme()
    };
    assert!(store.update(renamed).await.unwrap());
    assert!(!store.update(CompanyFixtures::beta()).await.unwrap());

    let all = store.find_all().await.unwrap();
    let acme = assert_single_with_key(&all, &CompanyFixtures::acme().key());
    assert_eq!(acme.company_name.as_deref(), Some("Acme Corp"));
    assert_eq!(acme.postal_zip_code.as_deref(), Some("1010"));

    let removed = store
        .delete(&KeyFilter::by_key(&CompanyFixtures::acme_south().key()))
        .await
        .unwrap();
    assert_eq!(removed, 1);
});

db_test!(test_duplicate_insert_is_store_failure, |pool| {
    let store = PostgresEmployeeStore::new(pool);

    store.insert(EmployeeFixtures::ana()).await.unwrap();
    assert_store_failure(store.insert(EmployeeFixtures::ana()).await);
});

db_test!(test_service_upsert_over_postgres, |pool| {
    let repository = Repository::new(Arc::new(PostgresCompanyStore::new(pool)))
        .with_timestamps(TimestampPolicy::ServerStamped)
        .with_clock(TemporalFixtures::fixed_now);
    let service = CompanyService::new(repository);

    service.save_company(fake_company("S3", "C30")).await.unwrap();
    service
        .save_company(Company::new("S3", "C30").with_country("NZ"))
        .await
        .unwrap();

    let stored = service
        .require_company(&"C30".into())
        .await
        .unwrap();
    assert_eq!(stored.country.as_deref(), Some("NZ"));
    assert!(stored.company_name.is_some());
    assert_stamped(&stored, TemporalFixtures::fixed_now());

    service.delete_company(&"C30".into()).await.unwrap();
    assert_not_found(service.require_company(&"C30".into()).await);
});

db_test!(test_employee_timestamps_survive_round_trip, |pool| {
    let store = PostgresEmployeeStore::new(pool);
    let employee: Employee = TestEmployeeBuilder::new()
        .modified_at(TemporalFixtures::supplied())
        .build();

    store.insert(employee.clone()).await.unwrap();

    let found = store.find(&KeyFilter::by_code("E1")).await.unwrap();
    assert_eq!(found, vec![employee]);
});
