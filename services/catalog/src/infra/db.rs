use std::collections::HashMap;

use anyhow::Context as _;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
    TransactionError, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use locallib_catalog_schema::{authors, book_genres, book_instances, books, genres, languages};
use locallib_core::pagination::fetch_page;
use locallib_domain::id::BookInstanceId;
use locallib_domain::loan::LoanStatus;
use locallib_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{
    AuthorRepository, BookInstanceRepository, BookRepository, CatalogCountsRepository,
};
use crate::domain::types::{
    Author, AuthorInput, Book, BookDetail, BookInput, BookInstance, CatalogCounts, Genre,
    Language, LoanedBookInstance,
};
use crate::error::CatalogServiceError;

fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    )
}

fn flatten_transaction_error(err: TransactionError<DbErr>) -> DbErr {
    match err {
        TransactionError::Connection(e) | TransactionError::Transaction(e) => e,
    }
}

// ── Author repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuthorRepository {
    pub db: DatabaseConnection,
}

impl AuthorRepository for DbAuthorRepository {
    async fn list(&self, page: PageRequest) -> Result<Page<Author>, CatalogServiceError> {
        let query = authors::Entity::find()
            .order_by_asc(authors::Column::LastName)
            .order_by_asc(authors::Column::FirstName);
        let page = fetch_page(query, &self.db, page)
            .await
            .context("list authors")?;
        Ok(page.map(author_from_model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, CatalogServiceError> {
        let model = authors::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find author by id")?;
        Ok(model.map(author_from_model))
    }

    async fn create(&self, input: &AuthorInput) -> Result<Author, CatalogServiceError> {
        let model = authors::ActiveModel {
            first_name: Set(input.first_name.trim().to_owned()),
            last_name: Set(input.last_name.trim().to_owned()),
            date_of_birth: Set(input.date_of_birth),
            date_of_death: Set(input.date_of_death),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create author")?;
        Ok(author_from_model(model))
    }

    async fn update(&self, id: i32, input: &AuthorInput) -> Result<bool, CatalogServiceError> {
        let result = authors::Entity::update_many()
            .col_expr(
                authors::Column::FirstName,
                Expr::value(input.first_name.trim().to_owned()),
            )
            .col_expr(
                authors::Column::LastName,
                Expr::value(input.last_name.trim().to_owned()),
            )
            .col_expr(authors::Column::DateOfBirth, Expr::value(input.date_of_birth))
            .col_expr(authors::Column::DateOfDeath, Expr::value(input.date_of_death))
            .filter(authors::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update author")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError> {
        let result = authors::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete author")?;
        Ok(result.rows_affected > 0)
    }
}

fn author_from_model(model: authors::Model) -> Author {
    Author {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        date_of_birth: model.date_of_birth,
        date_of_death: model.date_of_death,
    }
}

// ── Book repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBookRepository {
    pub db: DatabaseConnection,
}

impl BookRepository for DbBookRepository {
    async fn list(&self, page: PageRequest) -> Result<Page<Book>, CatalogServiceError> {
        let query = books::Entity::find()
            .order_by_asc(books::Column::Title)
            .order_by_asc(books::Column::AuthorId);
        let page = fetch_page(query, &self.db, page)
            .await
            .context("list books")?;
        Ok(page.map(book_from_model))
    }

    async fn list_by_author(&self, author_id: i32) -> Result<Vec<Book>, CatalogServiceError> {
        let models = books::Entity::find()
            .filter(books::Column::AuthorId.eq(author_id))
            .order_by_asc(books::Column::Title)
            .all(&self.db)
            .await
            .context("list books by author")?;
        Ok(models.into_iter().map(book_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, CatalogServiceError> {
        let model = books::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find book by id")?;
        Ok(model.map(book_from_model))
    }

    async fn find_detail(&self, id: i32) -> Result<Option<BookDetail>, CatalogServiceError> {
        let Some(model) = books::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find book by id")?
        else {
            return Ok(None);
        };

        let author = match model.author_id {
            Some(author_id) => authors::Entity::find_by_id(author_id)
                .one(&self.db)
                .await
                .context("find book author")?
                .map(author_from_model),
            None => None,
        };
        let language = match model.language_id {
            Some(language_id) => languages::Entity::find_by_id(language_id)
                .one(&self.db)
                .await
                .context("find book language")?
                .map(|l| Language {
                    id: l.id,
                    name: l.name,
                }),
            None => None,
        };
        let genres = model
            .find_related(genres::Entity)
            .order_by_asc(genres::Column::Id)
            .all(&self.db)
            .await
            .context("list book genres")?
            .into_iter()
            .map(|g| Genre {
                id: g.id,
                name: g.name,
            })
            .collect();
        let instances = model
            .find_related(book_instances::Entity)
            .order_by_asc(book_instances::Column::DueBack)
            .all(&self.db)
            .await
            .context("list book instances")?
            .into_iter()
            .map(instance_from_model)
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Some(BookDetail {
            book: book_from_model(model),
            author,
            language,
            genres,
            instances,
        }))
    }

    async fn create(&self, input: &BookInput) -> Result<Book, CatalogServiceError> {
        let input = input.clone();
        let result = self
            .db
            .transaction::<_, books::Model, DbErr>(|txn| {
                Box::pin(async move {
                    let model = books::ActiveModel {
                        title: Set(input.title.trim().to_owned()),
                        author_id: Set(input.author_id),
                        summary: Set(input.summary),
                        isbn: Set(input.isbn.trim().to_owned()),
                        language_id: Set(input.language_id),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;
                    replace_genres(txn, model.id, &input.genre_ids).await?;
                    Ok(model)
                })
            })
            .await
            .map_err(flatten_transaction_error);

        match result {
            Ok(model) => Ok(book_from_model(model)),
            Err(e) if is_foreign_key_violation(&e) => Err(CatalogServiceError::UnknownReference),
            Err(e) => Err(anyhow::Error::new(e).context("create book").into()),
        }
    }

    async fn update(&self, id: i32, input: &BookInput) -> Result<bool, CatalogServiceError> {
        let input = input.clone();
        let result = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    let updated = books::Entity::update_many()
                        .col_expr(books::Column::Title, Expr::value(input.title.trim().to_owned()))
                        .col_expr(books::Column::AuthorId, Expr::value(input.author_id))
                        .col_expr(books::Column::Summary, Expr::value(input.summary))
                        .col_expr(books::Column::Isbn, Expr::value(input.isbn.trim().to_owned()))
                        .col_expr(books::Column::LanguageId, Expr::value(input.language_id))
                        .filter(books::Column::Id.eq(id))
                        .exec(txn)
                        .await?;
                    if updated.rows_affected == 0 {
                        return Ok(false);
                    }
                    replace_genres(txn, id, &input.genre_ids).await?;
                    Ok(true)
                })
            })
            .await
            .map_err(flatten_transaction_error);

        match result {
            Ok(found) => Ok(found),
            Err(e) if is_foreign_key_violation(&e) => Err(CatalogServiceError::UnknownReference),
            Err(e) => Err(anyhow::Error::new(e).context("update book").into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError> {
        match books::Entity::delete_by_id(id).exec(&self.db).await {
            Ok(result) => Ok(result.rows_affected > 0),
            // ON DELETE RESTRICT from book_instances
            Err(e) if is_foreign_key_violation(&e) => Err(CatalogServiceError::BookHasInstances),
            Err(e) => Err(anyhow::Error::new(e).context("delete book").into()),
        }
    }
}

async fn replace_genres(
    txn: &DatabaseTransaction,
    book_id: i32,
    genre_ids: &[i32],
) -> Result<(), DbErr> {
    book_genres::Entity::delete_many()
        .filter(book_genres::Column::BookId.eq(book_id))
        .exec(txn)
        .await?;
    if genre_ids.is_empty() {
        return Ok(());
    }
    let rows = genre_ids.iter().map(|&genre_id| book_genres::ActiveModel {
        book_id: Set(book_id),
        genre_id: Set(genre_id),
    });
    book_genres::Entity::insert_many(rows).exec(txn).await?;
    Ok(())
}

fn book_from_model(model: books::Model) -> Book {
    Book {
        id: model.id,
        title: model.title,
        author_id: model.author_id,
        summary: model.summary,
        isbn: model.isbn,
        language_id: model.language_id,
    }
}

// ── Book instance repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBookInstanceRepository {
    pub db: DatabaseConnection,
}

impl BookInstanceRepository for DbBookInstanceRepository {
    async fn find_by_id(
        &self,
        id: BookInstanceId,
    ) -> Result<Option<BookInstance>, CatalogServiceError> {
        let model = book_instances::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find book instance by id")?;
        Ok(model.map(instance_from_model).transpose()?)
    }

    async fn list_on_loan(
        &self,
        borrower: Option<Uuid>,
        page: PageRequest,
    ) -> Result<Page<LoanedBookInstance>, CatalogServiceError> {
        let mut query = book_instances::Entity::find()
            .filter(book_instances::Column::Status.eq(LoanStatus::OnLoan.code()));
        if let Some(borrower_id) = borrower {
            query = query.filter(book_instances::Column::BorrowerId.eq(borrower_id));
        }
        let query = query.order_by_asc(book_instances::Column::DueBack);
        let page = fetch_page(query, &self.db, page)
            .await
            .context("list book instances on loan")?;

        let book_ids: Vec<i32> = page.items.iter().map(|m| m.book_id).collect();
        let titles: HashMap<i32, String> = books::Entity::find()
            .filter(books::Column::Id.is_in(book_ids))
            .all(&self.db)
            .await
            .context("load titles of loaned books")?
            .into_iter()
            .map(|b| (b.id, b.title))
            .collect();

        let items = page
            .items
            .into_iter()
            .map(|model| {
                let book_title = titles.get(&model.book_id).cloned().unwrap_or_default();
                Ok(LoanedBookInstance {
                    instance: instance_from_model(model)?,
                    book_title,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Page {
            items,
            page: page.page,
            per_page: page.per_page,
            total_items: page.total_items,
            total_pages: page.total_pages,
        })
    }

    async fn count_by_book(&self, book_id: i32) -> Result<u64, CatalogServiceError> {
        let count = book_instances::Entity::find()
            .filter(book_instances::Column::BookId.eq(book_id))
            .count(&self.db)
            .await
            .context("count book instances")?;
        Ok(count)
    }

    async fn create(&self, instance: &BookInstance) -> Result<(), CatalogServiceError> {
        let result = book_instances::ActiveModel {
            id: Set(instance.id.0),
            book_id: Set(instance.book_id),
            imprint: Set(instance.imprint.clone()),
            due_back: Set(instance.due_back),
            borrower_id: Set(instance.borrower_id),
            status: Set(instance.status.code().to_owned()),
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(_) => Ok(()),
            Err(e) if is_foreign_key_violation(&e) => Err(CatalogServiceError::BookNotFound),
            Err(e) => Err(anyhow::Error::new(e).context("create book instance").into()),
        }
    }

    async fn update_due_back(
        &self,
        id: BookInstanceId,
        due_back: NaiveDate,
    ) -> Result<bool, CatalogServiceError> {
        let result = book_instances::Entity::update_many()
            .col_expr(book_instances::Column::DueBack, Expr::value(Some(due_back)))
            .filter(book_instances::Column::Id.eq(id.0))
            .exec(&self.db)
            .await
            .context("update book instance due date")?;
        Ok(result.rows_affected > 0)
    }
}

fn instance_from_model(model: book_instances::Model) -> anyhow::Result<BookInstance> {
    let status = LoanStatus::from_code(model.status.trim())
        .with_context(|| format!("unknown loan status {:?} on {}", model.status, model.id))?;
    Ok(BookInstance {
        id: BookInstanceId(model.id),
        book_id: model.book_id,
        imprint: model.imprint,
        due_back: model.due_back,
        borrower_id: model.borrower_id,
        status,
    })
}

// ── Catalog counts ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCatalogCountsRepository {
    pub db: DatabaseConnection,
}

impl CatalogCountsRepository for DbCatalogCountsRepository {
    async fn counts(&self) -> Result<CatalogCounts, CatalogServiceError> {
        let books = books::Entity::find()
            .count(&self.db)
            .await
            .context("count books")?;
        let instances = book_instances::Entity::find()
            .count(&self.db)
            .await
            .context("count book instances")?;
        let available_instances = book_instances::Entity::find()
            .filter(book_instances::Column::Status.eq(LoanStatus::Available.code()))
            .count(&self.db)
            .await
            .context("count available book instances")?;
        let authors = authors::Entity::find()
            .count(&self.db)
            .await
            .context("count authors")?;
        Ok(CatalogCounts {
            books,
            instances,
            available_instances,
            authors,
        })
    }
}
