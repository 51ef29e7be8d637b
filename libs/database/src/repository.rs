//! Generic SeaORM repository.
//!
//! Domain repositories wrap a [`BaseRepository`] for the entity they own and
//! build their domain-specific queries on top of it.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IdenStatic, IntoActiveModel, Iterable, ModelTrait, Order, PaginatorTrait,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter, QueryOrder, Select, Value,
};
use std::cmp::Ordering;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::common::DatabaseResult;
use crate::pagination::{Direction, Page, PageRequest, PaginationError, Sort};

pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn find_by_id<K>(&self, id: K) -> Result<Option<E::Model>, DbErr>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id).one(&self.db).await
    }

    /// Whether any row matches `condition`.
    pub async fn exists(&self, condition: Condition) -> Result<bool, DbErr> {
        let count = E::find().filter(condition).count(&self.db).await?;
        Ok(count > 0)
    }

    /// Sorted and paged `select`. See [`fetch_page`].
    pub async fn find_page(
        &self,
        select: Select<E>,
        request: &PageRequest,
    ) -> DatabaseResult<Page<E::Model>> {
        fetch_page(&self.db, select, request).await
    }

    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(&self.db).await
    }

    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(&self.db).await
    }

    /// Returns the number of deleted rows; 0 when the id does not exist.
    pub async fn delete_by_id<K>(&self, id: K) -> Result<u64, DbErr>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

/// Resolve an API field name (camelCase or snake_case) to a column of `E`.
pub fn resolve_sort_column<E: EntityTrait>(field: &str) -> Result<E::Column, PaginationError> {
    let name = crate::pagination::to_snake_case(field);
    E::Column::from_str(&name).map_err(|_| PaginationError::UnknownSortField(field.to_string()))
}

/// Order `select` by the requested sort (primary key as tie-breaker) and fetch one page.
///
/// A page index past the end yields an empty page with the real total.
pub async fn fetch_page<E, C>(
    db: &C,
    select: Select<E>,
    request: &PageRequest,
) -> DatabaseResult<Page<E::Model>>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
    C: ConnectionTrait,
{
    let column = resolve_sort_column::<E>(&request.sort.field)?;
    let column_name = column.as_str();
    let mut select = select.order_by(column, Order::from(request.sort.direction));

    for key in E::PrimaryKey::iter() {
        let key_column = key.into_column();
        if key_column.as_str() != column_name {
            select = select.order_by(key_column, Order::Asc);
        }
    }

    let paginator = select.paginate(db, request.size);
    let total = paginator.num_items().await?;

    let items = if request.offset() >= total {
        Vec::new()
    } else {
        paginator.fetch_page(request.page).await?
    };

    Ok(Page::new(items, request, total))
}

/// In-process counterpart of the ordering applied by [`fetch_page`].
///
/// `model` selects the `E` row each item is ordered by. Ties are broken by primary key.
pub fn sort_rows<E, T, F>(rows: &mut [T], sort: &Sort, model: F) -> Result<(), PaginationError>
where
    E: EntityTrait,
    F: Fn(&T) -> &E::Model,
{
    let column = resolve_sort_column::<E>(&sort.field)?;
    let keys: Vec<E::Column> = E::PrimaryKey::iter().map(|k| k.into_column()).collect();

    rows.sort_by(|a, b| {
        let (a, b) = (model(a), model(b));
        let primary = compare_values(&a.get(column), &b.get(column));
        let primary = match sort.direction {
            Direction::Asc => primary,
            Direction::Desc => primary.reverse(),
        };
        keys.iter().fold(primary, |ordering, key| {
            ordering.then_with(|| compare_values(&a.get(*key), &b.get(*key)))
        })
    });

    Ok(())
}

// NULLs sort last, as PostgreSQL does for ascending order.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::SmallInt(a), Value::SmallInt(b)) => nulls_last(a, b),
        (Value::Int(a), Value::Int(b)) => nulls_last(a, b),
        (Value::BigInt(a), Value::BigInt(b)) => nulls_last(a, b),
        (Value::Bool(a), Value::Bool(b)) => nulls_last(a, b),
        (Value::String(a), Value::String(b)) => nulls_last(a, b),
        (Value::Decimal(a), Value::Decimal(b)) => nulls_last(a, b),
        _ => Ordering::Equal,
    }
}

fn nulls_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
