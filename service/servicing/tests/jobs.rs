mod common;

use common::{day, Desk, MemRepo};
use domain_servicing::{
    mock::{MockMaintenanceAlertRepo, MockMaintenanceScheduleRepo},
    model::{
        entity::{
            AlertStatus, Appliance, MaintenanceAlert, MaintenanceFrequency,
            MaintenanceScheduleInput, Manufacturer, ServiceTicket,
        },
        vo::{FixedClock, NotificationType, ServiceStatus, WarrantyStatus},
    },
    service::MaintenanceService,
};
use mockall::{predicate::eq, Sequence};
use service_servicing::{
    BillingJobConfig, BillingReportJob, MaintenanceJobConfig, MaintenanceReminderJob,
    MaintenanceServiceImpl,
};
use std::sync::Arc;
use uuid::Uuid;

fn schedule_input(desk: &Desk, next: &str) -> MaintenanceScheduleInput {
    MaintenanceScheduleInput {
        appliance_id: Some(desk.appliance.id.to_string()),
        name: Some("Čišćenje filtera".to_string()),
        frequency: Some("quarterly".to_string()),
        next_maintenance_date: Some(next.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_reminder_raises_one_alert_per_due_schedule() {
    let desk = Desk::new(day(2024, 5, 20));
    let maintenance = desk.maintenance_service();
    let due = maintenance
        .create_schedule(schedule_input(&desk, "2024-05-25"))
        .await
        .unwrap();
    maintenance
        .create_schedule(schedule_input(&desk, "2024-07-01"))
        .await
        .unwrap();
    let job = MaintenanceReminderJob::new(
        Arc::new(desk.maintenance_service()),
        MaintenanceJobConfig {
            lookahead_days: 7,
            ..Default::default()
        },
    );

    let alerts = job.run_once().await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].schedule_id, due.id);
    assert_eq!(alerts[0].alert_date, desk.today);
    let admin_inbox = desk.notifications_of(&desk.admin);
    assert_eq!(admin_inbox.len(), 1);
    assert_eq!(admin_inbox[0].kind, NotificationType::MaintenanceDue);

    // the pending alert keeps the next tick quiet
    assert!(job.run_once().await.unwrap().is_empty());
    assert_eq!(desk.alerts.rows().len(), 1);
}

#[tokio::test]
async fn test_reminder_comes_back_for_the_next_cycle() {
    let first_run = Desk::new(day(2024, 5, 20));
    let schedule = first_run
        .maintenance_service()
        .create_schedule(schedule_input(&first_run, "2024-05-25"))
        .await
        .unwrap();
    let config = MaintenanceJobConfig {
        lookahead_days: 7,
        ..Default::default()
    };
    let job = MaintenanceReminderJob::new(Arc::new(first_run.maintenance_service()), config.clone());
    assert_eq!(job.run_once().await.unwrap().len(), 1);

    let next = first_run
        .maintenance_service()
        .complete_maintenance(schedule.id, None)
        .await
        .unwrap();
    assert_eq!(next.next_maintenance_date, day(2024, 8, 20));
    let alerts = first_run.alerts.rows();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].status, AlertStatus::Completed);

    let second_run = Desk {
        today: day(2024, 8, 15),
        ..first_run
    };
    let job = MaintenanceReminderJob::new(Arc::new(second_run.maintenance_service()), config);
    let raised = job.run_once().await.unwrap();
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].schedule_id, schedule.id);
    assert_eq!(raised[0].alert_date, day(2024, 8, 15));
    assert_eq!(second_run.alerts.rows().len(), 2);
}

#[tokio::test]
async fn test_completing_maintenance_moves_the_due_date() {
    let desk = Desk::new(day(2024, 5, 20));
    let maintenance = desk.maintenance_service();
    let schedule = maintenance
        .create_schedule(schedule_input(&desk, "2024-05-20"))
        .await
        .unwrap();
    assert_eq!(schedule.frequency, MaintenanceFrequency::Quarterly);

    let next = maintenance
        .complete_maintenance(schedule.id, None)
        .await
        .unwrap();
    assert_eq!(next.last_maintenance_date, Some(day(2024, 5, 20)));
    assert_eq!(next.next_maintenance_date, day(2024, 8, 20));

    let next = maintenance
        .complete_maintenance(schedule.id, Some(day(2024, 8, 31)))
        .await
        .unwrap();
    assert_eq!(next.next_maintenance_date, day(2024, 11, 30));
}

#[tokio::test]
async fn test_completion_resolves_alerts_in_the_same_commit() {
    let desk = Desk::new(day(2024, 5, 20));
    let schedule = desk
        .maintenance_service()
        .create_schedule(schedule_input(&desk, "2024-05-22"))
        .await
        .unwrap();
    let alert = MaintenanceAlert::for_schedule(&schedule, desk.today);
    let (schedule_id, alert_id) = (schedule.id, alert.id);

    let mut seq = Sequence::new();
    let mut schedules = MockMaintenanceScheduleRepo::new();
    let mut alerts = MockMaintenanceAlertRepo::new();
    schedules
        .expect_find_by_id()
        .with(eq(schedule_id))
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |_| Ok(Some(schedule.clone())));
    schedules
        .expect_update()
        .withf(|s| s.next_maintenance_date == day(2024, 8, 20))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    alerts
        .expect_get_pending()
        .with(eq(schedule_id))
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |_| Ok(vec![alert.clone()]));
    alerts
        .expect_update()
        .withf(move |a| a.id == alert_id && a.status == AlertStatus::Completed && a.is_read)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    schedules
        .expect_save_changed()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(true));
    alerts.expect_save_changed().never();

    let maintenance = MaintenanceServiceImpl::builder()
        .schedule_repo(Arc::new(schedules))
        .alert_repo(Arc::new(alerts))
        .appliance_repo(desk.appliances.clone())
        .notification_service(desk.notification_service())
        .clock(desk.clock())
        .build();
    let next = maintenance
        .complete_maintenance(schedule_id, None)
        .await
        .unwrap();
    assert_eq!(next.last_maintenance_date, Some(day(2024, 5, 20)));
}

#[tokio::test]
async fn test_schedule_needs_a_known_appliance() {
    let desk = Desk::new(day(2024, 5, 20));
    let err = desk
        .maintenance_service()
        .create_schedule(MaintenanceScheduleInput {
            appliance_id: Some(Uuid::new_v4().to_string()),
            ..schedule_input(&desk, "2024-06-01")
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), 102);
}

fn completed(desk: &Desk, appliance: &Appliance, cost: &str, warranty: WarrantyStatus) -> ServiceTicket {
    ServiceTicket {
        id: Uuid::new_v4(),
        client_id: desk.client.id,
        appliance_id: appliance.id,
        technician_id: None,
        business_partner_id: None,
        description: "Zamjena grijača".to_string(),
        status: ServiceStatus::Completed,
        warranty_status: warranty,
        created_at: day(2024, 5, 1),
        scheduled_date: None,
        completed_date: Some(day(2024, 5, 10)),
        technician_notes: None,
        cost: Some(cost.to_string()),
        used_parts: None,
        machine_notes: None,
        is_completely_fixed: Some(true),
        partner_company_name: None,
        outcome: None,
        pickup: None,
        version: 2,
    }
}

#[tokio::test]
async fn test_billing_groups_warranty_work_by_manufacturer() {
    let desk = Desk::new(day(2024, 5, 31));
    let candy = Manufacturer {
        id: Uuid::new_v4(),
        name: "Candy".to_string(),
    };
    let candy_appliance = Appliance {
        id: Uuid::new_v4(),
        manufacturer_id: candy.id,
        ..desk.appliance.clone()
    };
    let appliances = MemRepo::with(vec![desk.appliance.clone(), candy_appliance.clone()]);
    let manufacturers = MemRepo::with(vec![desk.manufacturer.clone(), candy.clone()]);
    let mut old = completed(&desk, &desk.appliance, "9000", WarrantyStatus::InWarranty);
    old.completed_date = Some(day(2024, 3, 1));
    let services = MemRepo::with(vec![
        completed(&desk, &desk.appliance, "4.500,00 RSD", WarrantyStatus::InWarranty),
        completed(&desk, &desk.appliance, "1.500 RSD", WarrantyStatus::InWarranty),
        completed(&desk, &desk.appliance, "2000", WarrantyStatus::OutOfWarranty),
        completed(&desk, &candy_appliance, "3000", WarrantyStatus::InWarranty),
        old,
    ]);

    let job = BillingReportJob::builder()
        .service_repo(services)
        .appliance_repo(appliances)
        .manufacturer_repo(manufacturers)
        .notification_service(desk.notification_service())
        .clock(desk.clock())
        .config(BillingJobConfig {
            enable: true,
            period_days: 30,
            manufacturers: vec!["beko".to_string()],
            ..Default::default()
        })
        .build();

    let reports = job.run_once().await.unwrap();
    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!(report.manufacturer, "Beko");
    assert_eq!(report.period_from, day(2024, 5, 2));
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.total_cost, 6000.0);

    let admin_inbox = desk.notifications_of(&desk.admin);
    assert_eq!(admin_inbox.len(), 1);
    assert_eq!(admin_inbox[0].kind, NotificationType::BillingReport);
    assert_eq!(admin_inbox[0].title, "Billing report: Beko");
}

#[tokio::test]
async fn test_consecutive_billing_runs_bill_a_day_once() {
    let desk = Desk::new(day(2024, 5, 31));
    let mut boundary = completed(&desk, &desk.appliance, "4.500 RSD", WarrantyStatus::InWarranty);
    boundary.completed_date = Some(day(2024, 5, 31));
    let services = MemRepo::with(vec![boundary.clone()]);
    let run_on = |today| {
        BillingReportJob::builder()
            .service_repo(services.clone())
            .appliance_repo(desk.appliances.clone())
            .manufacturer_repo(desk.manufacturers.clone())
            .notification_service(desk.notification_service())
            .clock(Arc::new(FixedClock::on(today)))
            .config(BillingJobConfig {
                enable: true,
                period_days: 30,
                ..Default::default()
            })
            .build()
    };

    let may = run_on(day(2024, 5, 31)).run_once().await.unwrap();
    let june = run_on(day(2024, 6, 30)).run_once().await.unwrap();
    assert!(june.is_empty());
    assert_eq!(may.len(), 1);
    assert_eq!(may[0].entries.len(), 1);
    assert_eq!(may[0].entries[0].service_id, boundary.id);
    assert_eq!(may[0].total_cost, 4500.0);

    let billed: usize = may
        .iter()
        .chain(june.iter())
        .map(|r| r.entries.len())
        .sum();
    assert_eq!(billed, 1);
}

#[tokio::test]
async fn test_billing_without_work_sends_nothing() {
    let desk = Desk::new(day(2024, 5, 31));
    let job = BillingReportJob::builder()
        .service_repo(desk.services.clone())
        .appliance_repo(desk.appliances.clone())
        .manufacturer_repo(desk.manufacturers.clone())
        .notification_service(desk.notification_service())
        .clock(desk.clock())
        .config(BillingJobConfig::default())
        .build();

    assert!(job.run_once().await.unwrap().is_empty());
    assert!(desk.notifications.rows().is_empty());
}
