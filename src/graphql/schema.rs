use async_graphql::{Context, EmptySubscription, Object, Schema, extensions::Tracing};

use crate::storage::Repository;

use super::resolvers::{self, CreateAuthorArgs, CreateBlogArgs};
use super::types::*;

pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(repo: Repository) -> BlogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(Tracing)
        .data(repo)
        .finish()
}

fn get_repo<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Repository> {
    ctx.data::<Repository>()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// List every author
    async fn authors(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Author>>>> {
        let authors = resolvers::authors(get_repo(ctx)?).await?;
        Ok(Some(authors.into_iter().map(|a| Some(a.into())).collect()))
    }

    /// Get a single author by ID
    async fn author(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<Author>> {
        let author = resolvers::author(get_repo(ctx)?, &id).await?;
        Ok(Some(author.into()))
    }

    /// List every blog
    async fn blogs(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Blog>>>> {
        let blogs = resolvers::blogs(get_repo(ctx)?).await?;
        Ok(Some(blogs.into_iter().map(|b| Some(b.into())).collect()))
    }

    /// Get a single blog by ID
    async fn blog(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<Blog>> {
        let blog = resolvers::blog(get_repo(ctx)?, &id).await?;
        Ok(Some(blog.into()))
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a new author
    async fn create_author(
        &self,
        ctx: &Context<'_>,
        firstname: String,
        lastname: String,
    ) -> async_graphql::Result<Option<Author>> {
        let args = CreateAuthorArgs {
            firstname,
            lastname,
        };
        let author = resolvers::create_author(get_repo(ctx)?, args).await?;
        Ok(Some(author.into()))
    }

    /// Create a new blog written by an existing author
    async fn create_blog(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "authorID")] author_id: String,
        title: String,
        body: String,
    ) -> async_graphql::Result<Option<Blog>> {
        let args = CreateBlogArgs {
            author_id,
            title,
            body,
        };
        let blog = resolvers::create_blog(get_repo(ctx)?, args).await?;
        Ok(Some(blog.into()))
    }
}
