use contact_form_core_form_contracts::MockFormValidator;

use crate::ContactForm;


type Sut = ContactForm<MockFormValidator>;
