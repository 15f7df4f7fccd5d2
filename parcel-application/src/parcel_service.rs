//! 包裹应用服务
//!
//! 为全部包裹命令与查询实现处理器，底层仅依赖 `ParcelRepository`。
//!
use crate::{
    command::Command,
    command_handler::CommandHandler,
    commands::{ChangeAddress, ChangeStatus, RegisterParcel, RemoveParcel},
    context::AppContext,
    dto::{ParcelDto, ParcelListDto},
    error::AppError,
    queries::{GetParcel, ListClientParcels},
    query::Query,
    query_handler::QueryHandler,
};
use async_trait::async_trait;
use parcel_domain::parcel::Parcel;
use parcel_domain::persist::ParcelRepository;
use parcel_domain::value_object::ParcelNumber;
use tracing::{Instrument, Span, info, info_span};

pub struct ParcelService<R> {
    repo: R,
}

impl<R> ParcelService<R>
where
    R: ParcelRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// 执行命令
    pub async fn execute<C>(&self, ctx: &AppContext, cmd: C) -> Result<C::Output, AppError>
    where
        C: Command,
        Self: CommandHandler<C>,
    {
        <Self as CommandHandler<C>>::handle(self, ctx, cmd).await
    }

    /// 执行查询
    pub async fn query<Q>(&self, ctx: &AppContext, q: Q) -> Result<Q::Dto, AppError>
    where
        Q: Query,
        Self: QueryHandler<Q>,
    {
        <Self as QueryHandler<Q>>::handle(self, ctx, q).await
    }
}

fn handler_span(name: &'static str, ctx: &AppContext) -> Span {
    info_span!(
        "parcel_handler",
        op = name,
        correlation_id = ?ctx.correlation_id,
        actor_id = ?ctx.actor_id,
    )
}

#[async_trait]
impl<R> CommandHandler<RegisterParcel> for ParcelService<R>
where
    R: ParcelRepository,
{
    async fn handle(
        &self,
        ctx: &AppContext,
        cmd: RegisterParcel,
    ) -> Result<ParcelNumber, AppError> {
        async move {
            if cmd.address.trim().is_empty() {
                return Err(AppError::Validation("address must not be empty".to_string()));
            }

            let parcel = Parcel::register(cmd.client, cmd.address);
            let number = self.repo.add(&parcel).await?;

            info!(%number, client = %parcel.client(), "parcel registered");
            Ok::<_, AppError>(number)
        }
        .instrument(handler_span(RegisterParcel::NAME, ctx))
        .await
    }
}

#[async_trait]
impl<R> CommandHandler<ChangeAddress> for ParcelService<R>
where
    R: ParcelRepository,
{
    async fn handle(&self, ctx: &AppContext, cmd: ChangeAddress) -> Result<(), AppError> {
        async move {
            self.repo.set_address(cmd.number, &cmd.address).await?;
            info!(number = %cmd.number, "parcel address changed");
            Ok::<_, AppError>(())
        }
        .instrument(handler_span(ChangeAddress::NAME, ctx))
        .await
    }
}

#[async_trait]
impl<R> CommandHandler<ChangeStatus> for ParcelService<R>
where
    R: ParcelRepository,
{
    async fn handle(&self, ctx: &AppContext, cmd: ChangeStatus) -> Result<(), AppError> {
        async move {
            self.repo.set_status(cmd.number, cmd.status).await?;
            info!(number = %cmd.number, status = %cmd.status, "parcel status changed");
            Ok::<_, AppError>(())
        }
        .instrument(handler_span(ChangeStatus::NAME, ctx))
        .await
    }
}

#[async_trait]
impl<R> CommandHandler<RemoveParcel> for ParcelService<R>
where
    R: ParcelRepository,
{
    async fn handle(&self, ctx: &AppContext, cmd: RemoveParcel) -> Result<(), AppError> {
        async move {
            self.repo.delete(cmd.number).await?;
            info!(number = %cmd.number, "parcel removed");
            Ok::<_, AppError>(())
        }
        .instrument(handler_span(RemoveParcel::NAME, ctx))
        .await
    }
}

#[async_trait]
impl<R> QueryHandler<GetParcel> for ParcelService<R>
where
    R: ParcelRepository,
{
    async fn handle(&self, ctx: &AppContext, q: GetParcel) -> Result<ParcelDto, AppError> {
        async move {
            let parcel = self.repo.get(q.number).await?;
            Ok::<_, AppError>(ParcelDto::from(parcel))
        }
        .instrument(handler_span(GetParcel::NAME, ctx))
        .await
    }
}

#[async_trait]
impl<R> QueryHandler<ListClientParcels> for ParcelService<R>
where
    R: ParcelRepository,
{
    async fn handle(
        &self,
        ctx: &AppContext,
        q: ListClientParcels,
    ) -> Result<ParcelListDto, AppError> {
        async move {
            let mut parcels = self.repo.get_by_client(q.client).await?;
            parcels.sort_by_key(Parcel::number);

            Ok::<_, AppError>(ParcelListDto {
                client: q.client.value(),
                parcels: parcels.iter().map(ParcelDto::from).collect(),
            })
        }
        .instrument(handler_span(ListClientParcels::NAME, ctx))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcel_domain::error::{DomainError, DomainResult};
    use parcel_domain::value_object::{ClientId, ParcelStatus};
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI64, Ordering};

    /// 内存仓储：仅用于验证应用层编排
    #[derive(Default)]
    struct InMemoryParcelRepo {
        parcels: Mutex<BTreeMap<ParcelNumber, Parcel>>,
        next: AtomicI64,
        fail: bool,
    }

    impl InMemoryParcelRepo {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn check(&self) -> DomainResult<()> {
            if self.fail {
                return Err(DomainError::InvalidValue {
                    reason: "storage unavailable".into(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ParcelRepository for InMemoryParcelRepo {
        async fn add(&self, parcel: &Parcel) -> DomainResult<ParcelNumber> {
            self.check()?;
            let number = ParcelNumber::new(self.next.fetch_add(1, Ordering::SeqCst) + 1);
            self.parcels
                .lock()
                .unwrap()
                .insert(number, parcel.clone().with_number(number));
            Ok(number)
        }

        async fn get(&self, number: ParcelNumber) -> DomainResult<Parcel> {
            self.check()?;
            self.parcels
                .lock()
                .unwrap()
                .get(&number)
                .cloned()
                .ok_or_else(|| DomainError::not_found(format!("parcel {number}")))
        }

        async fn delete(&self, number: ParcelNumber) -> DomainResult<()> {
            self.check()?;
            self.parcels.lock().unwrap().remove(&number);
            Ok(())
        }

        async fn set_address(&self, number: ParcelNumber, address: &str) -> DomainResult<()> {
            self.check()?;
            let mut parcels = self.parcels.lock().unwrap();
            if let Some(p) = parcels.remove(&number) {
                parcels.insert(number, p.with_address(address));
            }
            Ok(())
        }

        async fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> DomainResult<()> {
            self.check()?;
            let mut parcels = self.parcels.lock().unwrap();
            if let Some(p) = parcels.remove(&number) {
                parcels.insert(number, p.with_status(status));
            }
            Ok(())
        }

        async fn get_by_client(&self, client: ClientId) -> DomainResult<Vec<Parcel>> {
            self.check()?;
            // 倒序返回，验证应用层自行排序
            Ok(self
                .parcels
                .lock()
                .unwrap()
                .values()
                .rev()
                .filter(|p| p.client() == client)
                .cloned()
                .collect())
        }
    }

    fn service() -> ParcelService<InMemoryParcelRepo> {
        ParcelService::new(InMemoryParcelRepo::default())
    }

    #[tokio::test]
    async fn register_then_get() {
        let svc = service();
        let ctx = AppContext::builder().correlation_id("cor-1".into()).build();

        let number = svc
            .execute(
                &ctx,
                RegisterParcel {
                    client: ClientId::new(1000),
                    address: "test".into(),
                },
            )
            .await
            .unwrap();
        assert!(number.is_assigned());

        let dto = svc.query(&ctx, GetParcel { number }).await.unwrap();
        assert_eq!(dto.number, number.value());
        assert_eq!(dto.client, 1000);
        assert_eq!(dto.status, ParcelStatus::Registered);
        assert_eq!(dto.address, "test");
    }

    #[tokio::test]
    async fn register_rejects_blank_address() {
        let svc = service();
        let err = svc
            .execute(
                &AppContext::default(),
                RegisterParcel {
                    client: ClientId::new(1),
                    address: "   ".into(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(svc.repository().parcels.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_parcel_maps_to_not_found() {
        let svc = service();
        let err = svc
            .query(
                &AppContext::default(),
                GetParcel {
                    number: ParcelNumber::new(5),
                },
            )
            .await
            .unwrap_err();

        match err {
            AppError::NotFound(reason) => assert_eq!(reason, "parcel 5"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn other_domain_errors_pass_through() {
        let svc = ParcelService::new(InMemoryParcelRepo::failing());
        let err = svc
            .execute(
                &AppContext::default(),
                RemoveParcel {
                    number: ParcelNumber::new(1),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::InvalidValue { .. })));
    }

    #[tokio::test]
    async fn list_is_sorted_by_number() {
        let svc = service();
        let ctx = AppContext::default();
        let client = ClientId::new(7);

        for address in ["x", "y", "z"] {
            svc.execute(
                &ctx,
                RegisterParcel {
                    client,
                    address: address.into(),
                },
            )
            .await
            .unwrap();
        }
        svc.execute(
            &ctx,
            RegisterParcel {
                client: ClientId::new(8),
                address: "other".into(),
            },
        )
        .await
        .unwrap();

        let list = svc.query(&ctx, ListClientParcels { client }).await.unwrap();
        assert_eq!(list.client, 7);
        let numbers: Vec<i64> = list.parcels.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
