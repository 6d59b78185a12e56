use sea_orm::{ConnectionTrait, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, Select};

use locallib_domain::pagination::{Page, PageRequest};

/// Run `select` as one page of results, with totals.
///
/// The request is clamped first, so callers may pass raw query params.
pub async fn fetch_page<E, C>(
    select: Select<E>,
    db: &C,
    request: PageRequest,
) -> Result<Page<E::Model>, DbErr>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync + 'static,
    C: ConnectionTrait,
{
    let PageRequest { per_page, page } = request.clamped();
    let paginator = select.paginate(db, per_page as u64);
    let totals = paginator.num_items_and_pages().await?;
    let items = paginator.fetch_page((page - 1) as u64).await?;
    Ok(Page {
        items,
        page,
        per_page,
        total_items: totals.number_of_items,
        total_pages: totals.number_of_pages,
    })
}
