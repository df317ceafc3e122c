use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, Operation};
use crate::models::notes::requests::{CreateNoteRequest, UpdateNoteRequest};
use crate::services::NoteService;
use crate::utils::SafeNoteIdI64;

// 懒加载的全局 NoteService 实例
static NOTE_SERVICE: Lazy<NoteService> = Lazy::new(NoteService::new_lazy);

pub async fn create_note(
    req: HttpRequest,
    note_data: web::Json<CreateNoteRequest>,
) -> ActixResult<HttpResponse> {
    NOTE_SERVICE.create_note(&req, note_data.into_inner()).await
}

pub async fn list_notes(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTE_SERVICE.list_notes(&req).await
}

pub async fn update_note(
    req: HttpRequest,
    note_id: SafeNoteIdI64,
    update_data: web::Json<UpdateNoteRequest>,
) -> ActixResult<HttpResponse> {
    NOTE_SERVICE
        .update_note(&req, note_id.0, update_data.into_inner())
        .await
}

pub async fn delete_note(req: HttpRequest, note_id: SafeNoteIdI64) -> ActixResult<HttpResponse> {
    NOTE_SERVICE.delete_note(&req, note_id.0).await
}

// 配置路由
pub fn configure_notes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_notes)
                            .wrap(middlewares::RequireRole::for_operation(Operation::ListNotes)),
                    )
                    .route(
                        web::post()
                            .to(create_note)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::CreateNote,
                            )),
                    ),
            )
            .service(
                web::resource("/{note_id}")
                    .route(
                        web::put()
                            .to(update_note)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::UpdateNote,
                            )),
                    )
                    .route(
                        web::delete()
                            .to(delete_note)
                            .wrap(middlewares::RequireRole::for_operation(
                                Operation::DeleteNote,
                            )),
                    ),
            ),
    );
}
