pub mod form;
pub mod form_user;
pub mod user;

/*
 Users register on their own and always keep their account; nothing deletes a user.
 A form belongs to exactly one author and carries a member list (form_user rows).
 The author can do anything with the form. Members may edit it but not delete it.
 so the flow would be:
 Alice signs up and creates a form. She is its author.
 Alice adds Bob to the form's member list. Bob can now edit the form.
 Bob still cannot delete it. Only Alice can.
 */
