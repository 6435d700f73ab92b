use std::sync::Arc;

use async_trait::async_trait;
use domain_inventory::{
    exception::{InventoryException, InventoryResult},
    model::{
        entity::{
            AllocationInput, AvailablePart, AvailablePartInput, MarkOrderedInput, PartKey,
            PartsActivityLog, PartsAllocation, ReceiptInput, SparePartOrder, SparePartOrderInput,
            StockLevel, StockReceipt, SupplierOrder,
        },
        vo::{PartAction, Urgency},
    },
    repository::{
        AvailablePartRepo, PartsActivityLogRepo, PartsAllocationRepo, SparePartOrderRepo,
        SupplierOrderRepo, SupplierRepo,
    },
    service::PartsFlowService,
};
use domain_servicing::{
    model::{
        entity::{Appliance, ServiceTicket, Technician},
        vo::{
            parse_amount, Checker, Clock, NotificationDraft, NotificationPriority,
            NotificationType, SystemClock, TextField, Validate, ValidationContext,
        },
    },
    service::NotificationService,
};
use servicing_architecture::repository::ReadOnlyRepository;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct PartsFlowServiceImpl {
    order_repo: Arc<dyn SparePartOrderRepo>,
    supplier_order_repo: Arc<dyn SupplierOrderRepo>,
    supplier_repo: Arc<dyn SupplierRepo>,
    part_repo: Arc<dyn AvailablePartRepo>,
    allocation_repo: Arc<dyn PartsAllocationRepo>,
    activity_repo: Arc<dyn PartsActivityLogRepo>,
    service_repo: Arc<dyn ReadOnlyRepository<ServiceTicket>>,
    technician_repo: Arc<dyn ReadOnlyRepository<Technician>>,
    appliance_repo: Arc<dyn ReadOnlyRepository<Appliance>>,
    notification_service: Arc<dyn NotificationService>,
    #[builder(default = Arc::new(SystemClock))]
    clock: Arc<dyn Clock>,
}

#[async_trait]
impl PartsFlowService for PartsFlowServiceImpl {
    async fn request_order(&self, input: SparePartOrderInput) -> InventoryResult<SparePartOrder> {
        let mut order = input.validate(&self.validation_context())?;
        if let Some(service_id) = order.service_id {
            self.service_repo
                .find_by_id(service_id)
                .await?
                .ok_or(InventoryException::not_found("service", service_id))?;
        }
        if let Some(technician_id) = order.technician_id {
            self.technician_repo
                .find_by_id(technician_id)
                .await?
                .ok_or(InventoryException::not_found("technician", technician_id))?;
        }
        if let Some(appliance_id) = order.appliance_id {
            self.appliance_repo
                .find_by_id(appliance_id)
                .await?
                .ok_or(InventoryException::not_found("appliance", appliance_id))?;
        }
        let now = self.clock.now();
        order.created_at = now;
        order.updated_at = now;
        self.order_repo.insert(&order).await?;
        self.order_repo.save_changed().await?;
        tracing::info!(order_id = %order.id, part = %order.part_name, urgency = ?order.urgency, "Spare part requested");

        let (kind, title) = match order.technician_id {
            Some(_) => (NotificationType::SparePartOrdered, "Spare part requested"),
            None => (NotificationType::AdminSparePartOrdered, "Spare part ordered by admin"),
        };
        let priority = match order.urgency {
            Urgency::Urgent => NotificationPriority::High,
            _ => NotificationPriority::Normal,
        };
        let mut draft = NotificationDraft::builder()
            .kind(kind)
            .title(title)
            .message(format!("{} x {}", order.quantity, order.part_name))
            .related_spare_part_id(order.id)
            .priority(priority)
            .build();
        draft.related_service_id = order.service_id;
        if let Err(e) = self.notification_service.notify_admins(draft).await {
            tracing::warn!("Failed to send spare part request notification: {e}");
        }
        Ok(order)
    }

    async fn approve(
        &self,
        order_id: Uuid,
        admin_notes: TextField,
    ) -> InventoryResult<SparePartOrder> {
        let ctx = self.validation_context();
        let mut c = Checker::new(&ctx);
        let admin_notes = c.optional_text("adminNotes", admin_notes, 0, 1000);
        let admin_notes = c.finish(admin_notes)?;

        let order = self.get_order(order_id).await?;
        let next = self
            .save_order(order.approve(admin_notes, self.clock.now())?)
            .await?;
        self.notify_requester(&next, "Spare part approved").await;
        Ok(next)
    }

    async fn mark_ordered(
        &self,
        order_id: Uuid,
        input: MarkOrderedInput,
    ) -> InventoryResult<SparePartOrder> {
        let ordered = input.validate(&self.validation_context())?;
        let order = self.get_order(order_id).await?;
        if self
            .supplier_order_repo
            .find_by_spare_part_order(order.id)
            .await?
            .is_some()
        {
            return Err(InventoryException::DuplicateSupplierOrder { order_id });
        }
        let supplier = self
            .supplier_repo
            .find_by_id(ordered.supplier_id)
            .await?
            .ok_or(InventoryException::not_found("supplier", ordered.supplier_id))?;
        if !supplier.is_active {
            return Err(InventoryException::InactiveSupplier { id: supplier.id });
        }

        let now = self.clock.now();
        let next = order.mark_ordered(supplier.name.clone(), &ordered, self.clock.today(), now)?;
        let supplier_order = SupplierOrder::sent(
            supplier.id,
            order.id,
            ordered.order_number.clone(),
            ordered.estimated_delivery,
            ordered.estimated_cost.as_deref().and_then(parse_amount),
            now,
        );
        self.order_repo.update_versioned(&next).await?;
        self.supplier_order_repo.insert(&supplier_order).await?;
        let next = self.commit_order(next).await?;
        tracing::info!(
            order_id = %order.id,
            supplier = %supplier.name,
            supplier_order = %supplier_order.order_number,
            "Spare part ordered"
        );
        self.notify_requester(&next, "Spare part ordered").await;
        Ok(next)
    }

    async fn mark_received(
        &self,
        order_id: Uuid,
        input: ReceiptInput,
    ) -> InventoryResult<SparePartOrder> {
        let receipt = input.validate(&self.validation_context())?;
        let order = self.get_order(order_id).await?;
        let now = self.clock.now();
        let next = order.mark_received(&receipt, self.clock.today(), now)?;

        let (mut category_id, mut manufacturer_id) = (receipt.category_id, receipt.manufacturer_id);
        if let Some(appliance_id) = order.appliance_id {
            if let Some(appliance) = self.appliance_repo.find_by_id(appliance_id).await? {
                category_id = category_id.or(Some(appliance.category_id));
                manufacturer_id = manufacturer_id.or(Some(appliance.manufacturer_id));
            }
        }
        let stock = StockReceipt {
            received_by: receipt.received_by,
            category_id,
            manufacturer_id,
            location: receipt.location.clone(),
            unit_cost: receipt.unit_cost.clone(),
        };

        self.order_repo.update_versioned(&next).await?;
        let key = PartKey::new(
            order.part_number.as_deref(),
            &order.part_name,
            category_id,
            manufacturer_id,
        );
        let (part, previous_quantity) = match self.part_repo.find_by_key(&key).await? {
            Some(part) => {
                let updated = part.add_quantity(order.quantity, now);
                self.part_repo.update_versioned(&updated).await?;
                (updated, part.quantity)
            }
            None => {
                let part = AvailablePart::from_order(&next, &stock, now);
                self.part_repo.insert(&part).await?;
                (part, 0)
            }
        };

        if let Some(supplier_order) = self.supplier_order_repo.find_by_spare_part_order(order.id).await? {
            self.supplier_order_repo
                .update(&supplier_order.mark_delivered(now))
                .await?;
        }
        self.activity_repo
            .insert(
                &PartsActivityLog::builder()
                    .part_id(part.id)
                    .action(PartAction::Added)
                    .previous_quantity(previous_quantity)
                    .new_quantity(part.quantity)
                    .technician_id(order.technician_id)
                    .service_id(order.service_id)
                    .user_id(receipt.received_by)
                    .description(format!("Received from order {}", order.id))
                    .timestamp(now)
                    .build(),
            )
            .await?;
        let next = self.commit_order(next).await?;
        tracing::info!(order_id = %order.id, part_id = %part.id, quantity = part.quantity, "Spare part received");
        self.notify_requester(&next, "Spare part arrived").await;
        Ok(next)
    }

    async fn confirm_delivery(
        &self,
        order_id: Uuid,
        confirmed_by: Uuid,
    ) -> InventoryResult<SparePartOrder> {
        let order = self.get_order(order_id).await?;
        let next = self
            .save_order(order.confirm_delivery(confirmed_by, self.clock.now())?)
            .await?;
        tracing::info!(
            order_id = %order_id,
            removed = next.removed_from_ordering_at.is_some(),
            "Spare part delivered"
        );
        Ok(next)
    }

    async fn cancel(&self, order_id: Uuid) -> InventoryResult<SparePartOrder> {
        let order = self.get_order(order_id).await?;
        let now = self.clock.now();
        let next = order.cancel(now)?;
        self.order_repo.update_versioned(&next).await?;
        if let Some(supplier_order) = self.supplier_order_repo.find_by_spare_part_order(order_id).await? {
            match supplier_order.cancel(now) {
                Some(cancelled) => self.supplier_order_repo.update(&cancelled).await?,
                None => tracing::warn!(
                    order_id = %order_id,
                    supplier_order = %supplier_order.order_number,
                    "Supplier order is already on its way and stays as is"
                ),
            }
        }
        let next = self.commit_order(next).await?;
        self.notify_requester(&next, "Spare part order cancelled").await;
        Ok(next)
    }

    async fn remove_from_ordering(&self, order_id: Uuid) -> InventoryResult<SparePartOrder> {
        let order = self.get_order(order_id).await?;
        self.save_order(order.remove_from_ordering(self.clock.now())?)
            .await
    }

    async fn active_orders(&self) -> InventoryResult<Vec<SparePartOrder>> {
        Ok(self.order_repo.get_active().await?)
    }

    async fn order_history(&self) -> InventoryResult<Vec<SparePartOrder>> {
        Ok(self.order_repo.get_all().await?)
    }

    async fn add_stock(&self, input: AvailablePartInput) -> InventoryResult<AvailablePart> {
        let part = input.validate(&self.validation_context())?;
        let now = self.clock.now();
        let (part, previous_quantity) = match self.part_repo.find_by_key(&part.key()).await? {
            Some(existing) => {
                let updated = existing.add_quantity(part.quantity, now);
                self.part_repo.update_versioned(&updated).await?;
                (updated, existing.quantity)
            }
            None => {
                self.part_repo.insert(&part).await?;
                (part, 0)
            }
        };
        self.activity_repo
            .insert(
                &PartsActivityLog::builder()
                    .part_id(part.id)
                    .action(PartAction::Added)
                    .previous_quantity(previous_quantity)
                    .new_quantity(part.quantity)
                    .service_id(part.service_id)
                    .user_id(part.added_by)
                    .description("Added manually")
                    .timestamp(now)
                    .build(),
            )
            .await?;
        self.part_repo.save_changed().await?;
        Ok(part)
    }

    async fn on_hand(&self, part_id: Uuid) -> InventoryResult<i32> {
        let part = self.get_part(part_id).await?;
        let allocations = self.allocation_repo.get_by_part(part_id).await?;
        Ok(part.on_hand(&allocations))
    }

    async fn allocate(&self, input: AllocationInput) -> InventoryResult<PartsAllocation> {
        let mut allocation = input.validate(&self.validation_context())?;
        let part = self.get_part(allocation.available_part_id).await?;
        if !part.is_active {
            return Err(InventoryException::InactivePart { id: part.id });
        }
        self.service_repo
            .find_by_id(allocation.service_id)
            .await?
            .ok_or(InventoryException::not_found("service", allocation.service_id))?;
        self.technician_repo
            .find_by_id(allocation.technician_id)
            .await?
            .ok_or(InventoryException::not_found("technician", allocation.technician_id))?;

        let available = part.on_hand(&self.allocation_repo.get_by_part(part.id).await?);
        let requested = allocation.allocated_quantity;
        if requested > available {
            return Err(InventoryException::InsufficientStock {
                requested,
                available,
            });
        }
        // commits only if no other writer touched the part since it was read
        self.part_repo.bump_version(part.id, part.version).await?;

        let now = self.clock.now();
        allocation.allocated_date = now;
        self.allocation_repo.insert(&allocation).await?;
        self.activity_repo
            .insert(
                &PartsActivityLog::builder()
                    .part_id(part.id)
                    .action(PartAction::Allocated)
                    .previous_quantity(available)
                    .new_quantity(available - requested)
                    .technician_id(allocation.technician_id)
                    .service_id(allocation.service_id)
                    .user_id(allocation.allocated_by)
                    .timestamp(now)
                    .build(),
            )
            .await?;
        self.allocation_repo.save_changed().await?;
        tracing::info!(
            part_id = %part.id,
            allocation_id = %allocation.id,
            quantity = requested,
            left = available - requested,
            "Parts allocated"
        );

        let draft = NotificationDraft::builder()
            .kind(NotificationType::PartsAllocated)
            .title("Parts allocated")
            .message(format!("{requested} x {} allocated to you", part.part_name))
            .related_service_id(allocation.service_id)
            .related_spare_part_id(part.id)
            .build();
        if let Err(e) = self
            .notification_service
            .notify_technician(allocation.technician_id, draft)
            .await
        {
            tracing::warn!("Failed to send allocation notification: {e}");
        }
        Ok(allocation)
    }

    async fn mark_allocation_used(&self, allocation_id: Uuid) -> InventoryResult<PartsAllocation> {
        let allocation = self.get_allocation(allocation_id).await?;
        let now = self.clock.now();
        let used = allocation.mark_used(now)?;
        self.allocation_repo.update(&used).await?;
        self.log_allocation(&used, PartAction::Consumed, now).await?;
        self.allocation_repo.save_changed().await?;
        Ok(used)
    }

    async fn return_allocation(&self, allocation_id: Uuid) -> InventoryResult<PartsAllocation> {
        let allocation = self.get_allocation(allocation_id).await?;
        let now = self.clock.now();
        let returned = allocation.mark_returned(now)?;
        self.allocation_repo.update(&returned).await?;
        self.log_allocation(&returned, PartAction::Returned, now).await?;
        self.allocation_repo.save_changed().await?;
        tracing::info!(
            allocation_id = %allocation_id,
            quantity = returned.allocated_quantity,
            "Parts returned to stock"
        );
        Ok(returned)
    }

    async fn available_parts(&self) -> InventoryResult<Vec<StockLevel>> {
        let mut levels = vec![];
        for part in self.part_repo.get_active().await? {
            let allocations = self.allocation_repo.get_by_part(part.id).await?;
            let on_hand = part.on_hand(&allocations);
            levels.push(StockLevel { part, on_hand });
        }
        Ok(levels)
    }
}

impl PartsFlowServiceImpl {
    fn validation_context(&self) -> ValidationContext {
        ValidationContext::on(self.clock.today())
    }

    async fn get_order(&self, order_id: Uuid) -> InventoryResult<SparePartOrder> {
        self.order_repo
            .find_by_id(order_id)
            .await?
            .ok_or(InventoryException::not_found("spare part order", order_id))
    }

    async fn get_part(&self, part_id: Uuid) -> InventoryResult<AvailablePart> {
        self.part_repo
            .find_by_id(part_id)
            .await?
            .ok_or(InventoryException::not_found("available part", part_id))
    }

    async fn get_allocation(&self, allocation_id: Uuid) -> InventoryResult<PartsAllocation> {
        self.allocation_repo
            .find_by_id(allocation_id)
            .await?
            .ok_or(InventoryException::not_found("allocation", allocation_id))
    }

    async fn save_order(&self, next: SparePartOrder) -> InventoryResult<SparePartOrder> {
        self.order_repo.update_versioned(&next).await?;
        self.commit_order(next).await
    }

    /// Commits the buffered batch holding the versioned write of `next` and
    /// returns the order at its new version. A stale order fails the batch.
    async fn commit_order(&self, mut next: SparePartOrder) -> InventoryResult<SparePartOrder> {
        self.order_repo.save_changed().await?;
        next.version += 1;
        tracing::debug!(order_id = %next.id, status = %next.status, "Spare part order saved");
        Ok(next)
    }

    async fn log_allocation(
        &self,
        allocation: &PartsAllocation,
        action: PartAction,
        now: chrono::DateTime<chrono::Utc>,
    ) -> InventoryResult<()> {
        self.activity_repo
            .insert(
                &PartsActivityLog::builder()
                    .part_id(allocation.available_part_id)
                    .action(action)
                    .technician_id(allocation.technician_id)
                    .service_id(allocation.service_id)
                    .description(format!(
                        "{} x allocation {}",
                        allocation.allocated_quantity, allocation.id
                    ))
                    .timestamp(now)
                    .build(),
            )
            .await?;
        Ok(())
    }

    /// Tells the technician who asked for the part how the order moved.
    async fn notify_requester(&self, order: &SparePartOrder, title: &str) {
        let Some(technician_id) = order.technician_id else {
            return;
        };
        let draft = NotificationDraft::builder()
            .kind(NotificationType::SparePartStatusChanged)
            .title(title)
            .message(format!("{}: {}", order.part_name, order.status))
            .related_spare_part_id(order.id)
            .build();
        if let Err(e) = self
            .notification_service
            .notify_technician(technician_id, draft)
            .await
        {
            tracing::warn!("Failed to send spare part status notification: {e}");
        }
    }
}
