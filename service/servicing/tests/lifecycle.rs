mod common;

use std::sync::Arc;

use common::{day, Desk, MemRepo};
use domain_servicing::{
    exception::ServicingException,
    mock::{MockNotificationService, MockServiceCompletionReportRepo, MockServiceTicketRepo},
    model::{
        entity::{
            ApplianceCategory, ApplianceCategoryInput, ApplianceInput, Client, ClientInput,
            Manufacturer, ManufacturerInput, RemovedPartInput, RemovedPartStatusChangeInput,
            ServiceCompletionReportInput, ServiceTicket, ServiceTicketInput, Technician,
        },
        vo::{
            NotificationPriority, NotificationType, ServiceOutcome, ServiceStatus,
            StateTransitionError, StatusChangeInput, TextField,
        },
    },
    service::{ApplianceService, ClientService, RemovedPartService, ServiceLifecycleService},
};
use mockall::{predicate::eq, Sequence};
use service_servicing::{ApplianceServiceImpl, ClientServiceImpl, ServiceLifecycleServiceImpl};
use servicing_architecture::repository::StaleVersion;
use uuid::Uuid;

fn new_ticket(desk: &Desk) -> ServiceTicketInput {
    ServiceTicketInput {
        client_id: Some(desk.client.id.to_string()),
        appliance_id: Some(desk.appliance.id.to_string()),
        description: Some("Ne centrifugira veš".to_string()),
        warranty_status: Some("in_warranty".to_string()),
        ..Default::default()
    }
}

fn to(status: &str) -> StatusChangeInput {
    StatusChangeInput {
        status: Some(status.to_string()),
        ..Default::default()
    }
}

fn scheduled_on(date: &str) -> StatusChangeInput {
    StatusChangeInput {
        scheduled_date: TextField::from(date),
        ..to("scheduled")
    }
}

#[tokio::test]
async fn test_marija_is_repaired_end_to_end() {
    let desk = Desk::new(day(2024, 5, 20));
    let categories: Arc<MemRepo<ApplianceCategory>> = MemRepo::new();
    let manufacturers: Arc<MemRepo<Manufacturer>> = MemRepo::new();
    let clients = ClientServiceImpl::builder()
        .client_repo(desk.clients.clone())
        .clock(desk.clock())
        .build();
    let appliances = ApplianceServiceImpl::builder()
        .appliance_repo(desk.appliances.clone())
        .client_repo(desk.clients.clone())
        .category_repo(categories.clone())
        .manufacturer_repo(manufacturers.clone())
        .clock(desk.clock())
        .build();

    let client = clients
        .create_client(ClientInput {
            full_name: Some("Marija Popović".to_string()),
            phone: Some("+382671234".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let category = appliances
        .create_category(ApplianceCategoryInput {
            name: Some("fridge-freezer".to_string()),
            icon: Some("fridge".to_string()),
        })
        .await
        .unwrap();
    let beko = appliances
        .create_manufacturer(ManufacturerInput {
            name: Some("Beko".to_string()),
        })
        .await
        .unwrap();
    let appliance = appliances
        .create_appliance(ApplianceInput {
            client_id: Some(client.id.to_string()),
            category_id: Some(category.id.to_string()),
            manufacturer_id: Some(beko.id.to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let lifecycle = desk.lifecycle();
    let ticket = lifecycle
        .create_service(ServiceTicketInput {
            client_id: Some(client.id.to_string()),
            appliance_id: Some(appliance.id.to_string()),
            status: Some("pending".to_string()),
            ..new_ticket(&desk)
        })
        .await
        .unwrap();
    assert_eq!(ticket.status, ServiceStatus::Pending);
    assert_eq!(ticket.created_at.format("%Y-%m-%d").to_string(), "2024-05-20");

    lifecycle
        .change_status(ticket.id, scheduled_on("2024-05-22"))
        .await
        .unwrap();
    lifecycle
        .change_status(ticket.id, to("in_progress"))
        .await
        .unwrap();
    let done = lifecycle
        .change_status(
            ticket.id,
            StatusChangeInput {
                is_completely_fixed: Some(true),
                ..to("completed")
            },
        )
        .await
        .unwrap();

    let stored = lifecycle.get_service(ticket.id).await.unwrap();
    assert_eq!(stored.status, ServiceStatus::Completed);
    assert_eq!(stored.is_completely_fixed, Some(true));
    assert_eq!(stored.completed_date, Some(day(2024, 5, 20)));
    assert_eq!(stored.version, 3);
    assert_eq!(done, stored);
}

#[tokio::test]
async fn test_scheduling_requires_a_date() {
    let desk = Desk::new(day(2024, 5, 20));
    let lifecycle = desk.lifecycle();
    let ticket = lifecycle.create_service(new_ticket(&desk)).await.unwrap();

    let err = lifecycle
        .change_status(ticket.id, to("scheduled"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServicingException::StateTransition(StateTransitionError::MissingField {
            field: "scheduledDate",
            ..
        })
    ));

    let err = lifecycle
        .change_status(ticket.id, to("completed"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), 101);
    assert_eq!(
        lifecycle.get_service(ticket.id).await.unwrap().status,
        ServiceStatus::Pending
    );
}

#[tokio::test]
async fn test_create_checks_references() {
    let desk = Desk::new(day(2024, 5, 20));
    let lifecycle = desk.lifecycle();

    let err = lifecycle
        .create_service(ServiceTicketInput {
            client_id: Some(Uuid::new_v4().to_string()),
            ..new_ticket(&desk)
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServicingException::NotFound { entity: "client", .. }));

    let other = desk.appliance.clone();
    let stranger = Client {
        id: Uuid::new_v4(),
        ..desk.client.clone()
    };
    let clients = MemRepo::with(vec![desk.client.clone(), stranger.clone()]);
    let lifecycle = ServiceLifecycleServiceImpl::builder()
        .service_repo(desk.services.clone())
        .removed_part_repo(desk.removed_parts.clone())
        .report_repo(desk.reports.clone())
        .client_repo(clients)
        .appliance_repo(desk.appliances.clone())
        .technician_repo(desk.technicians.clone())
        .user_repo(desk.users.clone())
        .notification_service(desk.notification_service())
        .clock(desk.clock())
        .build();
    let err = lifecycle
        .create_service(ServiceTicketInput {
            client_id: Some(stranger.id.to_string()),
            appliance_id: Some(other.id.to_string()),
            ..new_ticket(&desk)
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServicingException::ApplianceOwnerMismatch { .. }));

    let err = lifecycle
        .create_service(ServiceTicketInput {
            status: Some("completed".to_string()),
            description: Some("kvar".to_string()),
            ..new_ticket(&desk)
        })
        .await
        .unwrap_err();
    let ServicingException::Validation(errors) = err else {
        panic!("expected a validation error");
    };
    assert!(errors.has("status"));
    assert!(errors.has("description"));
    assert!(desk.services.rows().is_empty());
}

#[tokio::test]
async fn test_removed_parts_block_completion() {
    let desk = Desk::new(day(2024, 5, 20));
    let lifecycle = desk.lifecycle();
    let removed_parts = desk.removed_part_service();
    let ticket = lifecycle.create_service(new_ticket(&desk)).await.unwrap();
    lifecycle
        .change_status(ticket.id, scheduled_on("2024-05-21"))
        .await
        .unwrap();
    lifecycle
        .change_status(ticket.id, to("in_progress"))
        .await
        .unwrap();

    let part = removed_parts
        .register_removed_part(RemovedPartInput {
            service_id: Some(ticket.id.to_string()),
            part_name: Some("Elektronska ploča".to_string()),
            removal_reason: Some("Popravka u radionici".to_string()),
            created_by: Some(desk.technician_user.id.to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    lifecycle
        .change_status(ticket.id, to("device_parts_removed"))
        .await
        .unwrap();

    let err = lifecycle
        .change_status(ticket.id, to("completed"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServicingException::StateTransition(StateTransitionError::RemovedPartsOutstanding {
            count: 1
        })
    ));

    let status = |s: &str| RemovedPartStatusChangeInput {
        status: Some(s.to_string()),
        ..Default::default()
    };
    removed_parts
        .change_removed_part_status(part.id, status("in_repair"))
        .await
        .unwrap();
    removed_parts
        .change_removed_part_status(part.id, status("repaired"))
        .await
        .unwrap();
    let returned = removed_parts
        .change_removed_part_status(part.id, status("returned"))
        .await
        .unwrap();
    assert!(returned.is_reinstalled);
    assert_eq!(returned.actual_return_date, Some(desk.today));

    let done = lifecycle
        .change_status(ticket.id, to("completed"))
        .await
        .unwrap();
    assert_eq!(done.status, ServiceStatus::Completed);
}

#[tokio::test]
async fn test_override_completes_with_parts_out() {
    let desk = Desk::new(day(2024, 5, 20));
    let lifecycle = desk.lifecycle();
    let ticket = lifecycle.create_service(new_ticket(&desk)).await.unwrap();
    lifecycle
        .change_status(ticket.id, scheduled_on("2024-05-21"))
        .await
        .unwrap();
    lifecycle
        .change_status(ticket.id, to("in_progress"))
        .await
        .unwrap();
    desk.removed_part_service()
        .register_removed_part(RemovedPartInput {
            service_id: Some(ticket.id.to_string()),
            part_name: Some("Pumpa".to_string()),
            removal_reason: Some("Zamjena zaptivača".to_string()),
            created_by: Some(desk.admin.id.to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let done = lifecycle
        .change_status(
            ticket.id,
            StatusChangeInput {
                override_removed_parts: true,
                ..to("completed")
            },
        )
        .await
        .unwrap();
    assert_eq!(done.status, ServiceStatus::Completed);
}

#[tokio::test]
async fn test_stale_version_is_rejected() {
    let desk = Desk::new(day(2024, 5, 20));
    let lifecycle = desk.lifecycle();
    let ticket = lifecycle.create_service(new_ticket(&desk)).await.unwrap();

    lifecycle
        .change_status(
            ticket.id,
            StatusChangeInput {
                expected_version: Some(0),
                ..scheduled_on("2024-05-21")
            },
        )
        .await
        .unwrap();
    let err = lifecycle
        .change_status(
            ticket.id,
            StatusChangeInput {
                expected_version: Some(0),
                ..to("cancelled")
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServicingException::ConcurrentModification { .. }));
    assert_eq!(
        lifecycle.get_service(ticket.id).await.unwrap().status,
        ServiceStatus::Scheduled
    );
}

#[tokio::test]
async fn test_closed_ticket_only_leaves_through_reopen() {
    let desk = Desk::new(day(2024, 5, 20));
    let lifecycle = desk.lifecycle();
    let ticket = lifecycle.create_service(new_ticket(&desk)).await.unwrap();
    lifecycle
        .change_status(ticket.id, to("cancelled"))
        .await
        .unwrap();

    let err = lifecycle
        .change_status(ticket.id, scheduled_on("2024-05-21"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServicingException::StateTransition(StateTransitionError::Closed { .. })
    ));
    let err = lifecycle
        .assign_technician(ticket.id, desk.technician.id)
        .await
        .unwrap_err();
    assert_eq!(err.status(), 101);

    let reopened = lifecycle
        .reopen(ticket.id, "Klijent se predomislio".to_string())
        .await
        .unwrap();
    assert_eq!(reopened.status, ServiceStatus::InProgress);
    assert_eq!(
        reopened.technician_notes.as_deref(),
        Some("Reopened: Klijent se predomislio")
    );
    let err = lifecycle
        .reopen(ticket.id, "opet".to_string())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServicingException::StateTransition(StateTransitionError::NotClosed { .. })
    ));
}

#[tokio::test]
async fn test_assignment_notifies_the_technician() {
    let desk = Desk::new(day(2024, 5, 20));
    let lifecycle = desk.lifecycle();
    let ticket = lifecycle.create_service(new_ticket(&desk)).await.unwrap();
    assert!(desk.notifications.rows().is_empty());

    let assigned = lifecycle
        .assign_technician(ticket.id, desk.technician.id)
        .await
        .unwrap();
    assert_eq!(assigned.technician_id, Some(desk.technician.id));
    let sent = desk.notifications_of(&desk.technician_user);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].kind, NotificationType::ServiceAssigned);
    assert_eq!(sent[0].related_service_id, Some(ticket.id));

    let err = lifecycle
        .assign_technician(ticket.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, ServicingException::NotFound { entity: "technician", .. }));
}

#[tokio::test]
async fn test_inactive_technician_gets_no_work() {
    let desk = Desk::new(day(2024, 5, 20));
    let retired = Technician {
        id: Uuid::new_v4(),
        active: false,
        ..desk.technician.clone()
    };
    let technicians = MemRepo::with(vec![retired.clone()]);
    let lifecycle = ServiceLifecycleServiceImpl::builder()
        .service_repo(desk.services.clone())
        .removed_part_repo(desk.removed_parts.clone())
        .report_repo(desk.reports.clone())
        .client_repo(desk.clients.clone())
        .appliance_repo(desk.appliances.clone())
        .technician_repo(technicians)
        .user_repo(desk.users.clone())
        .notification_service(desk.notification_service())
        .clock(desk.clock())
        .build();

    let err = lifecycle
        .create_service(ServiceTicketInput {
            technician_id: TextField::from(retired.id.to_string().as_str()),
            ..new_ticket(&desk)
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServicingException::InactiveTechnician { id } if id == retired.id));
}

#[tokio::test]
async fn test_partner_tickets_reach_admins_and_partner() {
    let desk = Desk::new(day(2024, 5, 20));
    let lifecycle = desk.lifecycle();
    let ticket = lifecycle
        .create_service(ServiceTicketInput {
            business_partner_id: TextField::from(desk.partner.id.to_string().as_str()),
            partner_company_name: TextField::from("Tehno Centar"),
            ..new_ticket(&desk)
        })
        .await
        .unwrap();
    let admin_inbox = desk.notifications_of(&desk.admin);
    assert_eq!(admin_inbox.len(), 1);
    assert_eq!(admin_inbox[0].kind, NotificationType::ServiceCreated);
    assert!(admin_inbox[0].message.starts_with("Tehno Centar"));

    lifecycle
        .change_status(ticket.id, scheduled_on("2024-05-21"))
        .await
        .unwrap();
    lifecycle
        .change_status(ticket.id, to("in_progress"))
        .await
        .unwrap();
    let failed = lifecycle
        .change_status(
            ticket.id,
            StatusChangeInput {
                repair_failure_reason: TextField::from("Nema rezervnog dijela"),
                ..to("repair_failed")
            },
        )
        .await
        .unwrap();
    assert!(matches!(
        failed.outcome,
        Some(ServiceOutcome::RepairFailure { failure_date, .. }) if failure_date == desk.today
    ));

    let partner_inbox = desk.notifications_of(&desk.partner);
    assert_eq!(partner_inbox.len(), 3);
    assert!(partner_inbox
        .iter()
        .all(|n| n.kind == NotificationType::ServiceStatusChanged));
    let admin_inbox = desk.notifications_of(&desk.admin);
    assert_eq!(admin_inbox.len(), 2);
    assert_eq!(admin_inbox[1].kind, NotificationType::RepairFailed);
    assert_eq!(admin_inbox[1].priority, NotificationPriority::High);
}

#[tokio::test]
async fn test_refusal_replaces_the_previous_outcome() {
    let desk = Desk::new(day(2024, 5, 20));
    let lifecycle = desk.lifecycle();
    let ticket = lifecycle.create_service(new_ticket(&desk)).await.unwrap();
    lifecycle
        .change_status(ticket.id, scheduled_on("2024-05-21"))
        .await
        .unwrap();
    let not_home = lifecycle
        .change_status(
            ticket.id,
            StatusChangeInput {
                client_unavailable_reason: TextField::from("Niko nije otvorio"),
                ..to("client_not_home")
            },
        )
        .await
        .unwrap();
    assert!(matches!(
        not_home.outcome,
        Some(ServiceOutcome::ClientUnavailable { needs_rescheduling: true, .. })
    ));

    lifecycle
        .change_status(ticket.id, scheduled_on("2024-05-23"))
        .await
        .unwrap();
    let working = lifecycle
        .change_status(ticket.id, to("in_progress"))
        .await
        .unwrap();
    assert_eq!(working.outcome, None);

    let refused = lifecycle
        .change_status(
            ticket.id,
            StatusChangeInput {
                customer_refusal_reason: TextField::from("Preskupo"),
                ..to("customer_refuses_repair")
            },
        )
        .await
        .unwrap();
    assert_eq!(
        refused.outcome,
        Some(ServiceOutcome::CustomerRefusal {
            reason: "Preskupo".to_string()
        })
    );
    let admin_inbox = desk.notifications_of(&desk.admin);
    assert_eq!(admin_inbox.len(), 1);
    assert_eq!(admin_inbox[0].kind, NotificationType::CustomerRefusedRepair);

    let returned = lifecycle
        .change_status(ticket.id, to("device_returned"))
        .await
        .unwrap();
    let pickup = returned.pickup.unwrap();
    assert!(pickup.picked_up);
    assert_eq!(pickup.pickup_date, Some(desk.today));
}

#[tokio::test]
async fn test_failed_notification_keeps_the_ticket() {
    let desk = Desk::new(day(2024, 5, 20));
    let mut notifications = MockNotificationService::new();
    notifications
        .expect_notify_technician()
        .times(1)
        .returning(|_, _| Err(anyhow::anyhow!("mail server down").into()));
    let lifecycle = ServiceLifecycleServiceImpl::builder()
        .service_repo(desk.services.clone())
        .removed_part_repo(desk.removed_parts.clone())
        .report_repo(desk.reports.clone())
        .client_repo(desk.clients.clone())
        .appliance_repo(desk.appliances.clone())
        .technician_repo(desk.technicians.clone())
        .user_repo(desk.users.clone())
        .notification_service(Arc::new(notifications))
        .clock(desk.clock())
        .build();

    let ticket = lifecycle
        .create_service(ServiceTicketInput {
            technician_id: TextField::from(desk.technician.id.to_string().as_str()),
            ..new_ticket(&desk)
        })
        .await
        .unwrap();
    assert_eq!(desk.services.rows(), vec![ticket]);
}

#[tokio::test]
async fn test_list_by_status() {
    let desk = Desk::new(day(2024, 5, 20));
    let lifecycle = desk.lifecycle();
    let first = lifecycle.create_service(new_ticket(&desk)).await.unwrap();
    let second = lifecycle.create_service(new_ticket(&desk)).await.unwrap();
    lifecycle
        .change_status(second.id, to("cancelled"))
        .await
        .unwrap();

    let pending = lifecycle
        .list_services_by_status(ServiceStatus::Pending)
        .await
        .unwrap();
    assert_eq!(pending.iter().map(|t| t.id).collect::<Vec<_>>(), vec![first.id]);
    let err = lifecycle.get_service(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.status(), 102);
}

async fn in_progress(desk: &Desk, lifecycle: &ServiceLifecycleServiceImpl) -> ServiceTicket {
    let ticket = lifecycle
        .create_service(ServiceTicketInput {
            technician_id: TextField::from(desk.technician.id.to_string().as_str()),
            ..new_ticket(desk)
        })
        .await
        .unwrap();
    lifecycle
        .change_status(ticket.id, scheduled_on("2024-05-21"))
        .await
        .unwrap();
    lifecycle
        .change_status(ticket.id, to("in_progress"))
        .await
        .unwrap()
}

fn report_by(technician_id: Uuid) -> ServiceCompletionReportInput {
    ServiceCompletionReportInput {
        technician_id: Some(technician_id.to_string()),
        work_description: Some("Zamijenjena pumpa za vodu".to_string()),
        problem_diagnosis: Some("Pumpa blokirana stranim tijelom".to_string()),
        solution_description: Some("Ugrađena nova pumpa, test ciklus prošao".to_string()),
        warranty_status: Some("u garanciji".to_string()),
        labor_time: Some(75),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_completion_report_closes_the_ticket() {
    let desk = Desk::new(day(2024, 5, 20));
    let lifecycle = desk.lifecycle();
    let ticket = in_progress(&desk, &lifecycle).await;

    let done = lifecycle
        .complete_with_report(
            ticket.id,
            ServiceCompletionReportInput {
                total_cost: "4.500 RSD".into(),
                client_satisfaction: Some(5),
                ..report_by(desk.technician.id)
            },
        )
        .await
        .unwrap();
    assert_eq!(done.service.status, ServiceStatus::Completed);
    assert_eq!(done.service.completed_date, Some(desk.today));
    assert_eq!(done.service.cost.as_deref(), Some("4.500 RSD"));
    assert_eq!(done.service.is_completely_fixed, Some(true));
    assert_eq!(done.service.version, ticket.version + 1);
    assert_eq!(done.report.service_id, ticket.id);
    assert_eq!(desk.services.rows(), vec![done.service.clone()]);
    assert_eq!(lifecycle.completion_report(ticket.id).await.unwrap(), done.report);

    let err = lifecycle
        .complete_with_report(ticket.id, report_by(desk.technician.id))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServicingException::StateTransition(StateTransitionError::AlreadyReported)
    ));
    assert_eq!(desk.reports.rows().len(), 1);
}

#[tokio::test]
async fn test_only_the_assigned_technician_reports_on_work_in_progress() {
    let desk = Desk::new(day(2024, 5, 20));
    let lifecycle = desk.lifecycle();
    let ticket = in_progress(&desk, &lifecycle).await;

    let err = lifecycle
        .complete_with_report(ticket.id, report_by(Uuid::new_v4()))
        .await
        .unwrap_err();
    let ServicingException::Validation(errors) = err else {
        panic!("expected a validation error");
    };
    assert!(errors.has("technicianId"));

    let waiting = lifecycle
        .create_service(ServiceTicketInput {
            technician_id: TextField::from(desk.technician.id.to_string().as_str()),
            ..new_ticket(&desk)
        })
        .await
        .unwrap();
    let err = lifecycle
        .complete_with_report(waiting.id, report_by(desk.technician.id))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServicingException::StateTransition(StateTransitionError::NotAllowed { .. })
    ));
    assert!(desk.reports.rows().is_empty());
    assert_eq!(lifecycle.get_service(ticket.id).await.unwrap().status, ServiceStatus::InProgress);
    assert_eq!(lifecycle.completion_report(ticket.id).await.unwrap_err().status(), 102);
}

#[tokio::test]
async fn test_report_and_ticket_commit_together() {
    let desk = Desk::new(day(2024, 5, 20));
    let ticket = in_progress(&desk, &desk.lifecycle()).await;
    let (id, version) = (ticket.id, ticket.version);

    let mut seq = Sequence::new();
    let mut services = MockServiceTicketRepo::new();
    let mut reports = MockServiceCompletionReportRepo::new();
    services
        .expect_find_by_id()
        .with(eq(id))
        .times(1)
        .in_sequence(&mut seq)
        .returning(move |_| Ok(Some(ticket.clone())));
    reports
        .expect_get_by_service()
        .with(eq(id))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(None));
    reports
        .expect_insert()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|r| Ok(r.id));
    services
        .expect_update_versioned()
        .withf(move |t| t.status == ServiceStatus::Completed && t.version == version)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    services
        .expect_save_changed()
        .times(1)
        .in_sequence(&mut seq)
        .returning(move || Err(StaleVersion::new("service", id).into()));
    let lifecycle = ServiceLifecycleServiceImpl::builder()
        .service_repo(Arc::new(services))
        .removed_part_repo(desk.removed_parts.clone())
        .report_repo(Arc::new(reports))
        .client_repo(desk.clients.clone())
        .appliance_repo(desk.appliances.clone())
        .technician_repo(desk.technicians.clone())
        .user_repo(desk.users.clone())
        .notification_service(desk.notification_service())
        .clock(desk.clock())
        .build();

    let err = lifecycle
        .complete_with_report(id, report_by(desk.technician.id))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServicingException::ConcurrentModification { entity: "service", id: stale } if stale == id
    ));
    assert_eq!(err.status(), 103);
}
